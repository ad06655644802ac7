//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API, reduced to the daily
//! temperature extremes the advisory needs.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{DailyData, DailyTemperatures, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// IANA timezone the daily series is aligned to (default: Europe/London)
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    16
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            timezone: default_timezone(),
        }
    }
}

/// Weather client trait for fetching daily forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get daily temperature extremes for a location
    async fn get_daily_extremes(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<DailyTemperatures>, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a daily forecast request
    ///
    /// The timezone can contain a slash, so the query is assembled through
    /// `Url` for proper percent-encoding.
    fn build_forecast_url(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Url, WeatherError> {
        let days = days.clamp(1, 16);
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| WeatherError::RequestFailed(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| WeatherError::RequestFailed("Base URL cannot be a base".to_string()))?
            .push("forecast");
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("daily", "temperature_2m_max,temperature_2m_min")
            .append_pair("forecast_days", &days.to_string())
            .append_pair("timezone", &self.config.timezone);
        Ok(url)
    }

    /// Parse the parallel daily arrays into per-day extremes
    ///
    /// The three arrays are zipped; a length mismatch truncates to the
    /// shortest rather than failing the whole response.
    fn parse_daily(daily: &DailyData) -> Result<Vec<DailyTemperatures>, WeatherError> {
        daily
            .time
            .iter()
            .zip(daily.temperature_2m_max.iter())
            .zip(daily.temperature_2m_min.iter())
            .map(|((time, &max), &min)| {
                let date = NaiveDate::parse_from_str(time, "%Y-%m-%d")
                    .map_err(|e| WeatherError::ParseError(format!("Invalid date: {e}")))?;
                Ok(DailyTemperatures {
                    date,
                    temperature_max: max,
                    temperature_min: min,
                })
            })
            .collect()
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, days = %days))]
    async fn get_daily_extremes(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<DailyTemperatures>, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_forecast_url(latitude, longitude, days)?;
        debug!(url = %url, "Fetching daily forecast");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let daily = forecast.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        Self::parse_daily(&daily)
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check using London coordinates
        self.get_daily_extremes(51.5074, -0.1278, 1).await.is_ok()
    }
}
