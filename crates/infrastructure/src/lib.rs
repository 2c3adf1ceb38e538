//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the transit API over
//! HTTP and the interactive station prompt on the terminal.

pub mod adapters;

pub use adapters::*;
