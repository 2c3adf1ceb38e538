//! Wire types of the transport.rest responses
//!
//! Every field is optional on the wire. Conversion into the domain types
//! fills in empty values for anything the API left out or sent as `null`.

use chrono::{DateTime, Utc};
use domain::entities::{Departure, Line, NearbyStop, Operator, Products, Remark, Stop};
use domain::value_objects::GeoLocation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLocation {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<String>,
    name: Option<String>,
    location: Option<RawPoint>,
    /// Addresses and POIs carry their coordinates at the top level
    latitude: Option<f64>,
    longitude: Option<f64>,
    products: Option<Products>,
    #[serde(rename = "stationDHID")]
    station_dhid: Option<String>,
    distance: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDeparture {
    trip_id: Option<String>,
    stop: Option<RawLocation>,
    when: Option<DateTime<Utc>>,
    direction: Option<String>,
    line: Option<RawLine>,
    remarks: Option<Vec<RawRemark>>,
    delay: Option<i64>,
    platform: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLine {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<String>,
    fahrt_nr: Option<String>,
    name: Option<String>,
    public: Option<bool>,
    mode: Option<String>,
    product: Option<String>,
    operator: Option<RawOperator>,
    symbol: Option<String>,
    nr: Option<i64>,
    metro: Option<bool>,
    express: Option<bool>,
    night: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawOperator {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRemark {
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
    text: Option<String>,
}

impl RawLocation {
    fn coordinates(&self) -> Option<GeoLocation> {
        let (latitude, longitude) = match &self.location {
            Some(point) => (point.latitude?, point.longitude?),
            None => (self.latitude?, self.longitude?),
        };
        Some(GeoLocation::new_unchecked(latitude, longitude))
    }

    pub(crate) fn into_stop(self) -> Stop {
        let location = self.coordinates();
        Stop {
            kind: self.kind.unwrap_or_default(),
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            location,
            products: self.products.unwrap_or_default(),
            station_dhid: self.station_dhid,
        }
    }

    pub(crate) fn into_nearby_stop(self) -> NearbyStop {
        let distance = self.distance.unwrap_or_default();
        NearbyStop {
            stop: self.into_stop(),
            distance,
        }
    }
}

impl From<RawLine> for Line {
    fn from(raw: RawLine) -> Self {
        Self {
            kind: raw.kind.unwrap_or_default(),
            id: raw.id.unwrap_or_default(),
            fahrt_nr: raw.fahrt_nr.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            public: raw.public.unwrap_or_default(),
            mode: raw.mode.unwrap_or_default(),
            product: raw.product.unwrap_or_default(),
            operator: raw.operator.map(|op| Operator {
                kind: op.kind.unwrap_or_default(),
                id: op.id.unwrap_or_default(),
                name: op.name.unwrap_or_default(),
            }),
            symbol: raw.symbol.unwrap_or_default(),
            nr: raw.nr,
            metro: raw.metro.unwrap_or_default(),
            express: raw.express.unwrap_or_default(),
            night: raw.night.unwrap_or_default(),
        }
    }
}

impl From<RawDeparture> for Departure {
    fn from(raw: RawDeparture) -> Self {
        Self {
            trip_id: raw.trip_id.unwrap_or_default(),
            stop: raw.stop.map(RawLocation::into_stop).unwrap_or_default(),
            when: raw.when,
            direction: raw.direction.unwrap_or_default(),
            line: raw.line.map(Line::from).unwrap_or_default(),
            remarks: raw
                .remarks
                .unwrap_or_default()
                .into_iter()
                .map(|r| Remark {
                    kind: r.kind.unwrap_or_default(),
                    code: r.code.unwrap_or_default(),
                    text: r.text.unwrap_or_default(),
                })
                .collect(),
            delay: raw.delay.unwrap_or_default(),
            platform: raw.platform.unwrap_or_default(),
        }
    }
}
