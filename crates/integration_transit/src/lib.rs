//! Public transit integration
//!
//! A thin client for the [transport.rest](https://v5.vbb.transport.rest) HAFAS
//! endpoints: location search, nearby stops and station departures.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{HafasTransitClient, LocationsQuery, TransitClient, TransitConfig};
//!
//! let client = HafasTransitClient::new(&TransitConfig::default())?;
//! let stops = client
//!     .search_locations("Alexanderplatz", &LocationsQuery::stations_only())
//!     .await?;
//! let departures = client.get_departures(&stops[0].id, 60).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod query;

pub use client::{HafasTransitClient, TransitClient};
pub use config::TransitConfig;
pub use error::TransitError;
pub use query::{LocationsQuery, NearbyQuery};
