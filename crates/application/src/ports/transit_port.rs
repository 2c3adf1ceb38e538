//! Public transit service port
//!
//! The three read-only queries the departure board needs. Adapters in the
//! infrastructure layer implement this port on top of an HTTP client.

use async_trait::async_trait;
use domain::entities::{Departure, NearbyStop, Stop};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the transit API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Stops and stations whose name matches `query`, best match first
    async fn search_stations(&self, query: &str) -> Result<Vec<Stop>, ApplicationError>;

    /// Stops around a point, nearest first
    async fn stops_nearby(&self, location: GeoLocation) -> Result<Vec<NearbyStop>, ApplicationError>;

    /// Departures at `stop_id` within the next `duration_minutes`, in API order
    async fn departures(
        &self,
        stop_id: &str,
        duration_minutes: u32,
    ) -> Result<Vec<Departure>, ApplicationError>;
}
