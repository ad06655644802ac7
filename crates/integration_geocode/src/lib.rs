//! postcodes.io geocoding integration
//!
//! Client for the postcodes.io API (<https://postcodes.io>).
//! Resolves UK postcodes to coordinates without requiring an API key.

pub mod client;
mod models;

pub use client::{GeocodeClient, GeocodeConfig, GeocodeError, PostcodesIoClient};
pub use models::{GeocodedPlace, LookupResponse, PostcodeData};
