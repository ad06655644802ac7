//! Geocoder port
//!
//! Defines the interface for resolving a postcode to coordinates.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Postcode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for postcode geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodePort: Send + Sync {
    /// Resolve a postcode to a geographic location
    async fn locate(&self, postcode: &Postcode) -> Result<GeoLocation, ApplicationError>;

    /// Check if the geocoding service is available
    async fn is_available(&self) -> bool;
}
