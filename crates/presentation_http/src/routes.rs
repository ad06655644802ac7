//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(handlers::ui::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Advisory API (v1)
        .route("/v1/advisory", post(handlers::advisory::check_advisory))
        // Attach state
        .with_state(state)
}
