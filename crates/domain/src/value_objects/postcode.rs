//! Postcode value object with validation
//!
//! The postcode is a free-form location key passed to the geocoder; only
//! shape is validated here, not whether the postcode actually exists.
//!
//! # Examples
//!
//! ```
//! use domain::Postcode;
//!
//! // Postcodes are trimmed and normalized to uppercase
//! let postcode = Postcode::new(" hp18 9he ").unwrap();
//! assert_eq!(postcode.as_str(), "HP18 9HE");
//!
//! // Empty input is rejected
//! assert!(Postcode::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum accepted input length; real UK postcodes are at most 8 characters
const MAX_LEN: usize = 16;

/// A normalized postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Postcode {
    value: String,
}

impl Postcode {
    /// Create a new postcode, trimming whitespace and uppercasing
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or contains
    /// characters other than letters, digits, and spaces.
    pub fn new(postcode: impl Into<String>) -> Result<Self, DomainError> {
        let value = postcode.into().trim().to_uppercase();

        if value.is_empty() {
            return Err(DomainError::InvalidPostcode(
                "postcode must not be empty".to_string(),
            ));
        }
        if value.len() > MAX_LEN {
            return Err(DomainError::InvalidPostcode(format!(
                "postcode must be at most {MAX_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
        {
            return Err(DomainError::InvalidPostcode(
                "postcode may only contain letters, digits, and spaces".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the postcode as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
