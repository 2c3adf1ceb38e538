//! Stops and locations as returned by a location search

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Transport modes served at a stop
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Products {
    /// S-Bahn
    pub suburban: bool,
    /// U-Bahn
    pub subway: bool,
    pub tram: bool,
    pub bus: bool,
    pub ferry: bool,
    /// Long-distance trains (ICE/IC/EC)
    pub express: bool,
    /// Regional trains (RE/RB)
    pub regional: bool,
}

/// A stop, station, address or point of interest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Location type as reported by the API ("stop", "station", "location", ...)
    pub kind: String,
    /// Unique stop identifier
    pub id: String,
    /// Human-readable stop name
    pub name: String,
    /// Geographic position, if the API reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    pub products: Products,
    /// Global station id of the district hub this stop belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_dhid: Option<String>,
}

impl Stop {
    /// Create a new stop
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: "stop".to_string(),
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

/// A stop found by a proximity search, with its walking distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStop {
    pub stop: Stop,
    /// Distance from the queried point in metres
    pub distance: u32,
}

impl fmt::Display for NearbyStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} m)", self.stop, self.distance)
    }
}
