//! Domain entities - Records decoded from the transit API

mod departure;
mod location;

pub use departure::{DelayStatus, Departure, Line, Operator, Remark};
pub use location::{NearbyStop, Products, Stop};
