//! Departure board CLI
//!
//! Argument parsing and the run loop behind the `departures` binary.

pub mod app;
pub mod cli;

pub use app::{Outcome, run};
pub use cli::{Cli, EnvSnapshot, Settings, log_filter_from_verbosity};
