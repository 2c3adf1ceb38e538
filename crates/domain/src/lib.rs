//! Domain layer for the departure board
//!
//! Stops, departures and the filters applied to them. This layer knows
//! nothing about HTTP or terminals.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
