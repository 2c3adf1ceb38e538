//! Options for the location and nearby-stop searches
//!
//! Each option maps to exactly one query parameter. Start from `Default` and
//! override fields with struct update syntax:
//!
//! ```rust,ignore
//! let options = LocationsQuery { addresses: false, poi: false, ..LocationsQuery::default() };
//! ```

use serde::{Deserialize, Serialize};

/// Options for `GET /locations`
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsQuery {
    /// Allow approximate name matches
    pub fuzzy: bool,
    /// Maximum number of results
    pub results: u32,
    /// Include stops and stations
    pub stops: bool,
    /// Include street addresses
    pub addresses: bool,
    /// Include points of interest
    pub poi: bool,
    /// Include the lines serving each stop
    pub lines_of_stops: bool,
    /// Language of names and remarks
    pub language: String,
}

impl Default for LocationsQuery {
    fn default() -> Self {
        Self {
            fuzzy: true,
            results: 10,
            stops: true,
            addresses: true,
            poi: true,
            lines_of_stops: false,
            language: "en".to_string(),
        }
    }
}

impl LocationsQuery {
    /// Only stops and stations, no addresses or points of interest
    #[must_use]
    pub fn stations_only() -> Self {
        Self {
            addresses: false,
            poi: false,
            ..Self::default()
        }
    }

    pub(crate) fn params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.to_string()),
            ("fuzzy", self.fuzzy.to_string()),
            ("results", self.results.to_string()),
            ("stops", self.stops.to_string()),
            ("addresses", self.addresses.to_string()),
            ("poi", self.poi.to_string()),
            ("linesOfStops", self.lines_of_stops.to_string()),
            ("language", self.language.clone()),
            ("pretty", "false".to_string()),
        ]
    }
}

/// Options for `GET /stops/nearby`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyQuery {
    /// Maximum number of results
    pub results: u32,
    /// Maximum walking distance in metres, `None` for unbounded
    pub distance: Option<u32>,
    /// Include stops and stations
    pub stops: bool,
    /// Include points of interest
    pub poi: bool,
    /// Include the lines serving each stop
    pub lines_of_stops: bool,
    /// Language of names and remarks
    pub language: String,
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self {
            results: 8,
            distance: None,
            stops: true,
            poi: false,
            lines_of_stops: false,
            language: "en".to_string(),
        }
    }
}

impl NearbyQuery {
    pub(crate) fn params(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", format!("{latitude:.6}")),
            ("longitude", format!("{longitude:.6}")),
            ("results", self.results.to_string()),
            (
                "distance",
                self.distance
                    .filter(|d| *d > 0)
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            ("stops", self.stops.to_string()),
            ("poi", self.poi.to_string()),
            ("linesOfStops", self.lines_of_stops.to_string()),
            ("language", self.language.clone()),
            ("pretty", "false".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(params: &'a [(&'static str, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_locations_defaults() {
        let params = LocationsQuery::default().params("Alexanderplatz");
        assert_eq!(value(&params, "query"), "Alexanderplatz");
        assert_eq!(value(&params, "fuzzy"), "true");
        assert_eq!(value(&params, "results"), "10");
        assert_eq!(value(&params, "stops"), "true");
        assert_eq!(value(&params, "addresses"), "true");
        assert_eq!(value(&params, "poi"), "true");
        assert_eq!(value(&params, "linesOfStops"), "false");
        assert_eq!(value(&params, "language"), "en");
        assert_eq!(value(&params, "pretty"), "false");
    }

    #[test]
    fn test_locations_parameter_order() {
        let keys: Vec<&str> = LocationsQuery::default()
            .params("x")
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            [
                "query",
                "fuzzy",
                "results",
                "stops",
                "addresses",
                "poi",
                "linesOfStops",
                "language",
                "pretty"
            ]
        );
    }

    #[test]
    fn test_overrides_touch_only_their_field() {
        let options = LocationsQuery {
            results: 3,
            language: "de".to_string(),
            ..LocationsQuery::default()
        };
        let params = options.params("Zoo");
        assert_eq!(value(&params, "results"), "3");
        assert_eq!(value(&params, "language"), "de");
        assert_eq!(value(&params, "fuzzy"), "true");
        assert_eq!(value(&params, "poi"), "true");
    }

    #[test]
    fn test_stations_only() {
        let params = LocationsQuery::stations_only().params("Zoo");
        assert_eq!(value(&params, "addresses"), "false");
        assert_eq!(value(&params, "poi"), "false");
        assert_eq!(value(&params, "stops"), "true");
    }

    #[test]
    fn test_nearby_defaults() {
        let params = NearbyQuery::default().params(52.5219, 13.4115);
        assert_eq!(value(&params, "latitude"), "52.521900");
        assert_eq!(value(&params, "longitude"), "13.411500");
        assert_eq!(value(&params, "results"), "8");
        assert_eq!(value(&params, "distance"), "");
        assert_eq!(value(&params, "stops"), "true");
        assert_eq!(value(&params, "poi"), "false");
        assert_eq!(value(&params, "linesOfStops"), "false");
    }

    #[test]
    fn test_nearby_distance() {
        let bounded = NearbyQuery {
            distance: Some(400),
            ..NearbyQuery::default()
        };
        assert_eq!(value(&bounded.params(0.0, 0.0), "distance"), "400");

        let zero = NearbyQuery {
            distance: Some(0),
            ..NearbyQuery::default()
        };
        assert_eq!(value(&zero.params(0.0, 0.0), "distance"), "");
    }
}
