//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Forecast days the advisory pipeline requests from the provider
    pub forecast_days: u8,
}

/// Liveness check - is the server running?
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        forecast_days: state.config.forecast.forecast_days,
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub geocoder: ServiceStatus,
    pub forecast: ServiceStatus,
}

/// Status of a collaborator service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
}

/// Readiness check - can the server reach both collaborators?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let geocoder_healthy = state.advisory_service.geocoder_available().await;
    let forecast_healthy = state.advisory_service.forecast_available().await;

    let ready = geocoder_healthy && forecast_healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            geocoder: ServiceStatus {
                healthy: geocoder_healthy,
            },
            forecast: ServiceStatus {
                healthy: forecast_healthy,
            },
        }),
    )
}
