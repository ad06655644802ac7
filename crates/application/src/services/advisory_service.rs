//! Sowing Advisory Service
//!
//! Orchestrates the advisory pipeline: parse postcode, geocode, fetch the
//! daily forecast, evaluate. The two network steps are sequential and
//! dependent; any failure short-circuits to a failed request. A busy/idle
//! guard rejects overlapping submissions instead of interleaving them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::value_objects::Postcode;
use domain::{Rating, Recommendation, evaluate};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ForecastPort, GeocodePort};
use crate::request_state::RequestState;

/// Forecast days requested from the provider (its maximum horizon)
pub const DEFAULT_FORECAST_DAYS: u8 = 16;

/// Outcome of one advisory request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    /// The postcode the advisory was computed for
    pub postcode: Postcode,
    /// Resolved latitude
    pub latitude: f64,
    /// Resolved longitude
    pub longitude: f64,
    /// Days in the evaluation window with mean temperature at or above 8°C
    pub warm_days: u32,
    /// Days in the evaluation window with minimum below 2°C
    pub frost_days: u32,
    /// Binary sowing advisory
    pub recommendation: Recommendation,
    /// Qualitative rating of the window
    pub rating: Rating,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

/// Service producing sowing advisories for a postcode
pub struct AdvisoryService {
    geocoder: Arc<dyn GeocodePort>,
    forecast: Arc<dyn ForecastPort>,
    forecast_days: u8,
    state: Mutex<RequestState>,
}

/// Holds the in-flight slot for one request
///
/// The request future can be dropped at any await point when the caller
/// disconnects; dropping the guard unsettled abandons the slot back to
/// `Idle` so the service does not stay busy forever.
struct InFlightGuard<'a> {
    state: &'a Mutex<RequestState>,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    /// Take the in-flight slot; `None` while another request holds it
    fn acquire(state: &'a Mutex<RequestState>) -> Option<Self> {
        state.lock().begin().then_some(Self {
            state,
            settled: false,
        })
    }

    /// Settle the request with its outcome
    fn settle(mut self, outcome: &Result<AdvisoryReport, ApplicationError>) {
        self.settled = true;
        let mut state = self.state.lock();
        match outcome {
            Ok(report) => {
                state.succeed(report.clone());
            },
            Err(e) => {
                state.fail(e.to_string());
            },
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled && self.state.lock().abandon() {
            warn!("Advisory request dropped before settling; slot released");
        }
    }
}

impl std::fmt::Debug for AdvisoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryService")
            .field("geocoder", &"<GeocodePort>")
            .field("forecast", &"<ForecastPort>")
            .field("forecast_days", &self.forecast_days)
            .finish()
    }
}

impl AdvisoryService {
    /// Create a new advisory service over the two collaborator ports
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodePort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self {
            geocoder,
            forecast,
            forecast_days: DEFAULT_FORECAST_DAYS,
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Override the number of forecast days requested
    #[must_use]
    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    /// Run one advisory request for a raw postcode string
    ///
    /// Rejects with `ApplicationError::Busy` while another request is in
    /// flight. The lifecycle lock is never held across an await point, and
    /// a cancelled request releases the slot on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if the postcode is malformed or either collaborator
    /// fails; no partial result is produced.
    #[instrument(skip(self), fields(postcode = %postcode))]
    pub async fn check(&self, postcode: &str) -> Result<AdvisoryReport, ApplicationError> {
        let postcode = Postcode::new(postcode)?;

        let Some(guard) = InFlightGuard::acquire(&self.state) else {
            warn!("Rejected overlapping advisory request");
            return Err(ApplicationError::Busy);
        };

        let outcome = self.run_pipeline(&postcode).await;
        guard.settle(&outcome);
        outcome
    }

    /// The last settled request outcome, if any
    #[must_use]
    pub fn last_state(&self) -> RequestState {
        self.state.lock().clone()
    }

    /// Check if the geocoding collaborator is reachable
    pub async fn geocoder_available(&self) -> bool {
        self.geocoder.is_available().await
    }

    /// Check if the forecast collaborator is reachable
    pub async fn forecast_available(&self) -> bool {
        self.forecast.is_available().await
    }

    async fn run_pipeline(&self, postcode: &Postcode) -> Result<AdvisoryReport, ApplicationError> {
        let location = self.geocoder.locate(postcode).await?;
        debug!(%location, "Postcode resolved");

        let series = self
            .forecast
            .daily_extremes(&location, self.forecast_days)
            .await?;
        debug!(days = series.len(), "Forecast retrieved");

        let evaluation = evaluate(&series);
        info!(
            warm_days = evaluation.warm_days,
            frost_days = evaluation.frost_days,
            recommendation = %evaluation.recommendation,
            rating = %evaluation.rating,
            "Sowing window evaluated"
        );

        Ok(AdvisoryReport {
            postcode: postcode.clone(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            warm_days: evaluation.warm_days,
            frost_days: evaluation.frost_days,
            recommendation: evaluation.recommendation,
            rating: evaluation.rating,
            generated_at: Utc::now(),
        })
    }
}
