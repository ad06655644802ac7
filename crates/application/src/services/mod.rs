//! Application services - Use case implementations

mod advisory_service;

pub use advisory_service::{AdvisoryReport, AdvisoryService, DEFAULT_FORECAST_DAYS};
