//! Weather data models
//!
//! Types for representing daily forecast data from the Open-Meteo API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level Open-Meteo forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Latitude of the grid cell the forecast was computed for
    pub latitude: f64,
    /// Longitude of the grid cell the forecast was computed for
    pub longitude: f64,
    /// Resolved timezone name
    #[serde(default)]
    pub timezone: Option<String>,
    /// Daily series, present when requested
    #[serde(default)]
    pub daily: Option<DailyData>,
}

/// Raw daily series as returned by the API: parallel day-indexed arrays
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    /// ISO dates, one per day
    pub time: Vec<String>,
    /// Daily maximum temperature at 2m, in Celsius
    pub temperature_2m_max: Vec<f64>,
    /// Daily minimum temperature at 2m, in Celsius
    pub temperature_2m_min: Vec<f64>,
}

/// Parsed temperature extremes for one forecast day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperatures {
    /// The date of the forecast
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
}
