//! Application layer - Use cases and orchestration
//!
//! Port definitions, the departure service with its retry loop, and the
//! board formatter. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod retry;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use retry::{RetryPolicy, RetryResult, with_retry};
pub use services::*;
