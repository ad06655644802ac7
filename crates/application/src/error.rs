//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoder collaborator failed
    #[error("Geocoding failed: {0}")]
    Geocode(String),

    /// Forecast provider collaborator failed
    #[error("Forecast retrieval failed: {0}")]
    Forecast(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// An advisory request is already in flight
    #[error("A request is already in flight")]
    Busy,

    /// A collaborator rate limit was hit
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
