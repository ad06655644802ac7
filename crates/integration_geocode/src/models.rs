//! Geocoding data models
//!
//! Types for representing responses from the postcodes.io API.

use serde::{Deserialize, Serialize};

/// Response envelope returned by postcodes.io
///
/// The API reports a logical status in the body alongside the HTTP status;
/// both must indicate success before `result` is trusted.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    /// Logical status code (200 on success, 404 for unknown postcodes)
    pub status: u16,
    /// Error description when the lookup failed
    #[serde(default)]
    pub error: Option<String>,
    /// The resolved postcode data, present on success
    #[serde(default)]
    pub result: Option<PostcodeData>,
}

/// Per-postcode payload inside a successful lookup
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeData {
    /// The canonical postcode as stored by the service
    pub postcode: String,
    /// Latitude in degrees; null for a handful of non-geographic postcodes
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees; null for a handful of non-geographic postcodes
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Country the postcode belongs to
    #[serde(default)]
    pub country: Option<String>,
    /// Administrative district
    #[serde(default)]
    pub admin_district: Option<String>,
}

/// A successfully geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Canonical postcode
    pub postcode: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Country, when reported
    pub country: Option<String>,
    /// Administrative district, when reported
    pub district: Option<String>,
}
