//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod postcode;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use postcode::Postcode;
