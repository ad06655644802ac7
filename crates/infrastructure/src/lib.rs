//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides
//! configuration loading for the server binary.

pub mod adapters;
pub mod config;

pub use adapters::{ForecastAdapter, GeocodeAdapter};
pub use config::{AppConfig, ForecastAppConfig, GeocoderAppConfig, ServerConfig};
