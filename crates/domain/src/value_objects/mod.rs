//! Value Objects - Immutable, identity-less domain primitives

mod filter_set;
mod geo_location;

pub use filter_set::{DepartureFilter, FilterSet};
pub use geo_location::GeoLocation;
