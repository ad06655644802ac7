//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid postcode format
    #[error("Invalid postcode: {0}")]
    InvalidPostcode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_postcode_error_message() {
        let err = DomainError::InvalidPostcode("empty".to_string());
        assert_eq!(err.to_string(), "Invalid postcode: empty");
    }
}
