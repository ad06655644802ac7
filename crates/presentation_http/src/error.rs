//! API error handling
//!
//! Maps application errors onto HTTP status codes with a uniform JSON body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Rate limit exceeded".to_string(),
            ),
            Self::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Busy => Self::Conflict(err.to_string()),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::Geocode(_) | ApplicationError::Forecast(_) => {
                Self::ServiceUnavailable(err.to_string())
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn domain_error_maps_to_bad_request() {
        let app_err: ApplicationError = DomainError::InvalidPostcode("empty".to_string()).into();
        let api_err = ApiError::from(app_err);
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let api_err = ApiError::from(ApplicationError::NotFound("ZZ99 9ZZ".to_string()));
        assert!(matches!(api_err, ApiError::NotFound(_)));
    }

    #[test]
    fn busy_maps_to_conflict() {
        let api_err = ApiError::from(ApplicationError::Busy);
        assert!(matches!(api_err, ApiError::Conflict(_)));
    }

    #[test]
    fn rate_limited_maps_to_rate_limited() {
        let api_err = ApiError::from(ApplicationError::RateLimited);
        assert!(matches!(api_err, ApiError::RateLimited));
    }

    #[test]
    fn collaborator_errors_map_to_service_unavailable() {
        let api_err = ApiError::from(ApplicationError::Geocode("unreachable".to_string()));
        assert!(matches!(api_err, ApiError::ServiceUnavailable(_)));

        let api_err = ApiError::from(ApplicationError::Forecast("HTTP 500".to_string()));
        assert!(matches!(api_err, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn internal_response_hides_details() {
        let response = ApiError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serialization() {
        let body = ErrorResponse {
            error: "Bad request: no".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("bad_request"));
    }
}
