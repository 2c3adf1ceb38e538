//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod station_picker;
mod transit_adapter;

pub use station_picker::DialoguerStationPicker;
pub use transit_adapter::TransitAdapter;
