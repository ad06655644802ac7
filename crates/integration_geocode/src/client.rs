//! postcodes.io geocoding client
//!
//! HTTP client for the postcodes.io postcode lookup API.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{GeocodedPlace, LookupResponse};

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The postcode is unknown to the service
    #[error("Postcode not found: {0}")]
    PostcodeNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeConfig {
    /// postcodes.io API base URL (default: <https://api.postcodes.io>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.postcodes.io".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Geocoding client trait for resolving postcodes
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Look up a postcode and return its coordinates
    async fn lookup(&self, postcode: &str) -> Result<GeocodedPlace, GeocodeError>;

    /// Check if the geocoding service is healthy
    async fn is_healthy(&self) -> bool;
}

/// postcodes.io HTTP client implementation
#[derive(Debug)]
pub struct PostcodesIoClient {
    client: Client,
    config: GeocodeConfig,
}

impl PostcodesIoClient {
    /// Create a new postcodes.io client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodeError> {
        Self::new(GeocodeConfig::default())
    }

    /// Build the lookup URL for a postcode, percent-encoding the segment
    fn build_lookup_url(&self, postcode: &str) -> Result<Url, GeocodeError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocodeError::RequestFailed(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| GeocodeError::RequestFailed("Base URL cannot be a base".to_string()))?
            .push("postcodes")
            .push(postcode);
        Ok(url)
    }

    /// Extract a geocoded place from the response envelope
    ///
    /// postcodes.io reports a logical status in the body; only a body-level
    /// 200 with a result payload counts as success.
    fn parse_lookup(postcode: &str, body: LookupResponse) -> Result<GeocodedPlace, GeocodeError> {
        if body.status != 200 {
            let reason = body
                .error
                .unwrap_or_else(|| format!("logical status {}", body.status));
            return Err(GeocodeError::PostcodeNotFound(format!(
                "{postcode}: {reason}"
            )));
        }

        let data = body.result.ok_or_else(|| {
            GeocodeError::PostcodeNotFound(format!("{postcode}: result payload missing"))
        })?;

        let (Some(latitude), Some(longitude)) = (data.latitude, data.longitude) else {
            return Err(GeocodeError::ParseError(format!(
                "{postcode}: no coordinates for postcode"
            )));
        };

        Ok(GeocodedPlace {
            postcode: data.postcode,
            latitude,
            longitude,
            country: data.country,
            district: data.admin_district,
        })
    }
}

#[async_trait]
impl GeocodeClient for PostcodesIoClient {
    #[instrument(skip(self), fields(postcode = %postcode))]
    async fn lookup(&self, postcode: &str) -> Result<GeocodedPlace, GeocodeError> {
        let url = self.build_lookup_url(postcode)?;
        debug!(url = %url, "Looking up postcode");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeocodeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodeError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodeError::RequestFailed(format!("HTTP {status}")));
        }

        // A 404 still carries the JSON envelope with the logical error
        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::ParseError(e.to_string()))?;

        Self::parse_lookup(postcode, body)
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight probe against a well-known postcode
        self.lookup("SW1A 1AA").await.is_ok()
    }
}
