//! Geocode adapter - Implements GeocodePort using integration_geocode

use application::error::ApplicationError;
use application::ports::GeocodePort;
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Postcode};
use integration_geocode::{GeocodeClient, GeocodeConfig, GeocodeError, PostcodesIoClient};
use tracing::{debug, instrument};

/// Adapter for postcode geocoding using the postcodes.io API
pub struct GeocodeAdapter {
    client: PostcodesIoClient,
}

impl std::fmt::Debug for GeocodeAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeAdapter")
            .field("client", &"PostcodesIoClient")
            .finish()
    }
}

impl GeocodeAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = PostcodesIoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodeConfig) -> Result<Self, ApplicationError> {
        let client = PostcodesIoClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration geocode error to application error
    fn map_error(err: GeocodeError) -> ApplicationError {
        match err {
            GeocodeError::PostcodeNotFound(postcode) => {
                ApplicationError::NotFound(format!("Postcode not found: {postcode}"))
            },
            GeocodeError::RateLimitExceeded => ApplicationError::RateLimited,
            GeocodeError::ConnectionFailed(e)
            | GeocodeError::RequestFailed(e)
            | GeocodeError::ParseError(e)
            | GeocodeError::ServiceUnavailable(e) => ApplicationError::Geocode(e),
        }
    }
}

#[async_trait]
impl GeocodePort for GeocodeAdapter {
    #[instrument(skip(self), fields(postcode = %postcode))]
    async fn locate(&self, postcode: &Postcode) -> Result<GeoLocation, ApplicationError> {
        let place = self
            .client
            .lookup(postcode.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            lat = place.latitude,
            lon = place.longitude,
            "Resolved postcode"
        );

        GeoLocation::new(place.latitude, place.longitude)
            .map_err(|e| ApplicationError::Geocode(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
