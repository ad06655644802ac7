//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod forecast_adapter;
mod geocode_adapter;

pub use forecast_adapter::ForecastAdapter;
pub use geocode_adapter::GeocodeAdapter;
