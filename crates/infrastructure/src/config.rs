//! Application configuration

use integration_geocode::GeocodeConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoder configuration
    #[serde(default)]
    pub geocoder: GeocoderAppConfig,

    /// Forecast provider configuration
    #[serde(default)]
    pub forecast: ForecastAppConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
        }
    }
}

/// Geocoder service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderAppConfig {
    /// postcodes.io API base URL
    #[serde(default = "default_geocoder_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_geocoder_base_url() -> String {
    "https://api.postcodes.io".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for GeocoderAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeocoderAppConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_geocode_config(&self) -> GeocodeConfig {
        GeocodeConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Forecast provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastAppConfig {
    /// Open-Meteo API base URL
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days requested (1-16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// IANA timezone the daily series is aligned to
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_forecast_days() -> u8 {
    16
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            timezone: default_timezone(),
        }
    }
}

impl ForecastAppConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            forecast_days: self.forecast_days,
            timezone: self.timezone.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be read or the
    /// assembled values fail to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("geocoder.base_url", "https://api.postcodes.io")?
            .set_default("forecast.base_url", "https://api.open-meteo.com/v1")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SEEDCAST_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("SEEDCAST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_enabled);
        assert_eq!(config.geocoder.base_url, "https://api.postcodes.io");
        assert_eq!(config.forecast.forecast_days, 16);
        assert_eq!(config.forecast.timezone, "Europe/London");
    }

    #[test]
    fn app_config_deserialization() {
        let json = r#"{"server":{"port":8080}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn geocoder_config_overrides() {
        let json = r#"{"base_url":"http://localhost:9000","timeout_secs":5}"#;
        let config: GeocoderAppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn forecast_config_defaults_apply_for_missing_fields() {
        let json = r#"{"forecast_days":7}"#;
        let config: ForecastAppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timezone, "Europe/London");
    }

    #[test]
    fn to_geocode_config_carries_values() {
        let app = GeocoderAppConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 7,
        };
        let config = app.to_geocode_config();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn to_weather_config_carries_values() {
        let app = ForecastAppConfig {
            base_url: "http://localhost:9001".to_string(),
            timeout_secs: 7,
            forecast_days: 14,
            timezone: "auto".to_string(),
        };
        let config = app.to_weather_config();
        assert_eq!(config.base_url, "http://localhost:9001");
        assert_eq!(config.forecast_days, 14);
        assert_eq!(config.timezone, "auto");
    }

    #[test]
    fn app_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("server"));
        assert!(json.contains("geocoder"));
        assert!(json.contains("forecast"));
    }
}
