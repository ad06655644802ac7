//! Seedcast HTTP presentation layer
//!
//! This crate provides the JSON API and the embedded browser UI.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
