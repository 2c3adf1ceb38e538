//! Departure service
//!
//! Drives the transit port for the three things the board can do: list
//! stations matching a name, list stops near a point, and fetch departures
//! with a bounded retry loop. Also resolves a station name to a stop through
//! an interactive picker.

use std::sync::Arc;

use domain::entities::{Departure, NearbyStop, Stop};
use domain::value_objects::GeoLocation;
use domain::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{StationPicker, TransitPort};
use crate::retry::{RetryPolicy, with_retry};

/// Stop shown when neither an id nor a station name was given (S+U Alexanderplatz)
pub const DEFAULT_STOP_ID: &str = "900000100003";

/// Prompt shown above the candidate stations
pub const STATION_PROMPT: &str = "Choose a station:";

/// Outcome of resolving a station name
#[derive(Debug, Clone, PartialEq)]
pub enum StationChoice {
    /// The user picked this stop
    Picked(Stop),
    /// The prompt failed or was dismissed; this is the best search match
    Fallback(Stop),
}

impl StationChoice {
    #[must_use]
    pub const fn stop(&self) -> &Stop {
        match self {
            Self::Picked(stop) | Self::Fallback(stop) => stop,
        }
    }

    #[must_use]
    pub fn into_stop(self) -> Stop {
        match self {
            Self::Picked(stop) | Self::Fallback(stop) => stop,
        }
    }
}

/// Use cases of the departure board
pub struct DepartureService {
    transit: Arc<dyn TransitPort>,
}

impl std::fmt::Debug for DepartureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepartureService").finish_non_exhaustive()
    }
}

impl DepartureService {
    #[must_use]
    pub fn new(transit: Arc<dyn TransitPort>) -> Self {
        Self { transit }
    }

    /// Stations matching `query`, one request, no retries
    #[instrument(skip(self))]
    pub async fn search_stations(&self, query: &str) -> Result<Vec<Stop>, ApplicationError> {
        if query.trim().is_empty() {
            return Err(DomainError::ValidationError("search term must not be empty".to_string()).into());
        }
        let stations = self.transit.search_stations(query).await?;
        debug!(count = stations.len(), "Stations found");
        Ok(stations)
    }

    /// Stops near `location`, one request, no retries
    #[instrument(skip(self))]
    pub async fn stops_nearby(&self, location: GeoLocation) -> Result<Vec<NearbyStop>, ApplicationError> {
        self.transit.stops_nearby(location).await
    }

    /// Search for `name` and let the user choose among the matches
    ///
    /// Falls back to the first match when the picker fails.
    ///
    /// # Errors
    ///
    /// Fails when the search fails or finds nothing.
    #[instrument(skip(self, picker))]
    pub async fn resolve_station(
        &self,
        name: &str,
        picker: &dyn StationPicker,
    ) -> Result<StationChoice, ApplicationError> {
        let mut stations = self.search_stations(name).await?;
        if stations.is_empty() {
            return Err(DomainError::not_found("Station", name).into());
        }

        let labels: Vec<String> = stations.iter().map(|s| s.name.clone()).collect();

        match picker.pick(STATION_PROMPT, &labels, 0) {
            Ok(index) if index < stations.len() => {
                let stop = stations.swap_remove(index);
                info!(id = %stop.id, name = %stop.name, "Station picked");
                Ok(StationChoice::Picked(stop))
            },
            Ok(index) => {
                warn!(index, "Picker returned an index outside the candidate list");
                Ok(StationChoice::Fallback(stations.swap_remove(0)))
            },
            Err(e) => {
                warn!(error = %e, "Station prompt failed");
                Ok(StationChoice::Fallback(stations.swap_remove(0)))
            },
        }
    }

    /// Departures at `stop_id`, retried per `policy` until one attempt succeeds
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt once every attempt failed.
    #[instrument(skip(self))]
    pub async fn fetch_departures(
        &self,
        stop_id: &str,
        duration_minutes: u32,
        policy: &RetryPolicy,
    ) -> Result<Vec<Departure>, ApplicationError> {
        let outcome = with_retry(policy, || self.transit.departures(stop_id, duration_minutes)).await;
        debug!(attempts = outcome.attempts, "Departure fetch finished");
        outcome.into_result()
    }
}
