//! HAFAS transit client via transport.rest API
//!
//! Provides location search, nearby-stop lookup and station departures.
//! Every call issues exactly one GET request; retrying is left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use domain::entities::{Departure, NearbyStop, Stop};
use domain::value_objects::GeoLocation;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::TransitConfig;
use crate::error::TransitError;
use crate::models::{RawDeparture, RawLocation};
use crate::query::{LocationsQuery, NearbyQuery};

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Search stops, addresses and points of interest by name
    async fn search_locations(
        &self,
        query: &str,
        options: &LocationsQuery,
    ) -> Result<Vec<Stop>, TransitError>;

    /// Find stops around a point, nearest first
    async fn search_stops_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        options: &NearbyQuery,
    ) -> Result<Vec<NearbyStop>, TransitError>;

    /// Departures at a stop within the next `duration_minutes`
    async fn get_departures(
        &self,
        stop_id: &str,
        duration_minutes: u32,
    ) -> Result<Vec<Departure>, TransitError>;
}

/// HAFAS-based transit client using the transport.rest API
#[derive(Debug)]
pub struct HafasTransitClient {
    client: Client,
    config: TransitConfig,
}

impl HafasTransitClient {
    /// Create a new HAFAS transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        config.validate().map_err(TransitError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, TransitError> {
        debug!(%url, "Requesting transit API");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(TransitError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| TransitError::ParseError(e.to_string()))
    }
}

/// Append path segments to a configured root, escaping each segment
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, TransitError> {
    let mut url =
        Url::parse(base).map_err(|e| TransitError::ConfigurationError(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| TransitError::ConfigurationError(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[async_trait]
impl TransitClient for HafasTransitClient {
    #[instrument(skip(self, options))]
    async fn search_locations(
        &self,
        query: &str,
        options: &LocationsQuery,
    ) -> Result<Vec<Stop>, TransitError> {
        if query.trim().is_empty() {
            return Err(TransitError::InvalidRequest(
                "Search query must not be empty".to_string(),
            ));
        }

        let url = endpoint(&self.config.base_url, &["locations"])?;
        let raw: Vec<RawLocation> = self.get_json(url, &options.params(query)).await?;

        debug!(count = raw.len(), "Locations found");
        Ok(raw.into_iter().map(RawLocation::into_stop).collect())
    }

    #[instrument(skip(self, options))]
    async fn search_stops_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        options: &NearbyQuery,
    ) -> Result<Vec<NearbyStop>, TransitError> {
        let point = GeoLocation::new(latitude, longitude)
            .map_err(|e| TransitError::InvalidLocation(e.to_string()))?;

        let url = endpoint(&self.config.base_url, &["stops", "nearby"])?;
        let raw: Vec<RawLocation> = self
            .get_json(url, &options.params(point.latitude(), point.longitude()))
            .await?;

        debug!(count = raw.len(), "Nearby stops found");
        Ok(raw.into_iter().map(RawLocation::into_nearby_stop).collect())
    }

    #[instrument(skip(self))]
    async fn get_departures(
        &self,
        stop_id: &str,
        duration_minutes: u32,
    ) -> Result<Vec<Departure>, TransitError> {
        if stop_id.trim().is_empty() {
            return Err(TransitError::InvalidRequest(
                "Stop id must not be empty".to_string(),
            ));
        }
        if duration_minutes == 0 {
            return Err(TransitError::InvalidRequest(
                "Duration must be at least one minute".to_string(),
            ));
        }

        let url = endpoint(
            &self.config.departures_base_url,
            &["stations", stop_id, "departures"],
        )?;
        let params = [("duration", duration_minutes.to_string())];
        let raw: Vec<RawDeparture> = self.get_json(url, &params).await?;

        debug!(count = raw.len(), "Departures found");
        Ok(raw.into_iter().map(Departure::from).collect())
    }
}
