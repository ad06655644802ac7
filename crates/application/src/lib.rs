//! Application layer - Use cases and orchestration
//!
//! Contains the advisory pipeline, the request lifecycle state machine, and
//! the port definitions the infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod request_state;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use request_state::RequestState;
pub use services::*;
