//! Advisory handlers

use application::AdvisoryReport;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use domain::{Rating, Recommendation};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ApiError, state::AppState};

/// Advisory request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    /// UK postcode to evaluate, e.g. "HP18 9HE"
    pub postcode: String,
}

/// Advisory response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    /// Canonical postcode the advisory was computed for
    pub postcode: String,
    /// Resolved latitude
    pub latitude: f64,
    /// Resolved longitude
    pub longitude: f64,
    /// Warm days in the evaluation window
    pub warm_days: u32,
    /// Frost days in the evaluation window
    pub frost_days: u32,
    /// Binary sowing advisory ("go" or "no_go")
    pub recommendation: Recommendation,
    /// Human-readable advisory label
    pub recommendation_label: String,
    /// Qualitative rating of the window
    pub rating: Rating,
    /// Human-readable rating label
    pub rating_label: String,
    /// When the advisory was computed
    pub generated_at: DateTime<Utc>,
}

impl From<AdvisoryReport> for AdvisoryResponse {
    fn from(report: AdvisoryReport) -> Self {
        Self {
            postcode: report.postcode.as_str().to_string(),
            latitude: report.latitude,
            longitude: report.longitude,
            warm_days: report.warm_days,
            frost_days: report.frost_days,
            recommendation: report.recommendation,
            recommendation_label: report.recommendation.label().to_string(),
            rating: report.rating,
            rating_label: report.rating.label().to_string(),
            generated_at: report.generated_at,
        }
    }
}

/// Run an advisory for a postcode
///
/// Returns 409 if another advisory request is still in flight.
pub async fn check_advisory(
    State(state): State<AppState>,
    Json(request): Json<AdvisoryRequest>,
) -> Result<Json<AdvisoryResponse>, ApiError> {
    let report = state.advisory_service.check(&request.postcode).await?;

    info!(
        postcode = %report.postcode,
        recommendation = %report.recommendation,
        rating = %report.rating,
        "Advisory computed"
    );

    Ok(Json(AdvisoryResponse::from(report)))
}
