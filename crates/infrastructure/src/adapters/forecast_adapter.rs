//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::forecast::{ForecastDay, ForecastSeries};
use domain::value_objects::GeoLocation;
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for daily forecasts using the Open-Meteo API
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Forecast(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Forecast(err.to_string())
            },
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), days))]
    async fn daily_extremes(
        &self,
        location: &GeoLocation,
        days: u8,
    ) -> Result<ForecastSeries, ApplicationError> {
        let daily = self
            .client
            .get_daily_extremes(location.latitude(), location.longitude(), days)
            .await
            .map_err(Self::map_error)?;

        debug!(days = daily.len(), "Retrieved daily forecast");

        Ok(daily
            .iter()
            .map(|d| ForecastDay::new(d.temperature_max, d.temperature_min))
            .collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
