//! Domain layer for Seedcast
//!
//! Contains the sowing advisory core: forecast types, the threshold
//! evaluator, value objects, and domain errors. This layer has no external
//! dependencies and performs no I/O.

pub mod advisory;
pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use advisory::{Evaluation, Rating, Recommendation, evaluate};
pub use errors::DomainError;
pub use forecast::{ForecastDay, ForecastSeries};
pub use value_objects::*;
