//! Application state shared across handlers

use std::sync::Arc;

use application::AdvisoryService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Advisory service running the postcode-to-recommendation pipeline
    pub advisory_service: Arc<AdvisoryService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
