//! Transit adapter - Implements TransitPort using integration_transit

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::TransitPort;
use async_trait::async_trait;
use domain::entities::{Departure, NearbyStop, Stop};
use domain::value_objects::GeoLocation;
use domain::DomainError;
use integration_transit::{
    HafasTransitClient, LocationsQuery, NearbyQuery, TransitClient, TransitConfig, TransitError,
};
use tracing::instrument;

/// Adapter for the transport.rest API
pub struct TransitAdapter {
    client: Arc<dyn TransitClient>,
    station_query: LocationsQuery,
    nearby_query: NearbyQuery,
}

impl std::fmt::Debug for TransitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitAdapter")
            .field("client", &"dyn TransitClient")
            .field("station_query", &self.station_query)
            .field("nearby_query", &self.nearby_query)
            .finish()
    }
}

impl TransitAdapter {
    /// Create an adapter backed by a HAFAS client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &TransitConfig) -> Result<Self, ApplicationError> {
        let client = HafasTransitClient::new(config).map_err(map_error)?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wrap an existing client. Station searches leave out addresses and POIs.
    #[must_use]
    pub fn from_client(client: Arc<dyn TransitClient>) -> Self {
        Self {
            client,
            station_query: LocationsQuery::stations_only(),
            nearby_query: NearbyQuery::default(),
        }
    }

    /// Override the options used for nearby searches
    #[must_use]
    pub fn with_nearby_query(mut self, query: NearbyQuery) -> Self {
        self.nearby_query = query;
        self
    }
}

fn map_error(err: TransitError) -> ApplicationError {
    match err {
        TransitError::InvalidRequest(msg) | TransitError::InvalidLocation(msg) => {
            DomainError::ValidationError(msg).into()
        },
        TransitError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl TransitPort for TransitAdapter {
    #[instrument(skip(self))]
    async fn search_stations(&self, query: &str) -> Result<Vec<Stop>, ApplicationError> {
        self.client
            .search_locations(query, &self.station_query)
            .await
            .map_err(map_error)
    }

    #[instrument(skip(self))]
    async fn stops_nearby(&self, location: GeoLocation) -> Result<Vec<NearbyStop>, ApplicationError> {
        self.client
            .search_stops_nearby(location.latitude(), location.longitude(), &self.nearby_query)
            .await
            .map_err(map_error)
    }

    #[instrument(skip(self))]
    async fn departures(
        &self,
        stop_id: &str,
        duration_minutes: u32,
    ) -> Result<Vec<Departure>, ApplicationError> {
        self.client
            .get_departures(stop_id, duration_minutes)
            .await
            .map_err(map_error)
    }
}
