//! Forecast provider port
//!
//! Defines the interface for daily temperature forecast retrieval.

use async_trait::async_trait;
use domain::forecast::ForecastSeries;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for daily forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Get daily temperature extremes for a location
    ///
    /// # Arguments
    /// * `location` - Geographic location
    /// * `days` - Number of forecast days requested (provider caps at 16)
    async fn daily_extremes(
        &self,
        location: &GeoLocation,
        days: u8,
    ) -> Result<ForecastSeries, ApplicationError>;

    /// Check if the forecast service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }
}
