//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod station_picker;
mod transit_port;

#[cfg(test)]
pub use station_picker::MockStationPicker;
pub use station_picker::{PickerError, StationPicker};
#[cfg(test)]
pub use transit_port::MockTransitPort;
pub use transit_port::TransitPort;
