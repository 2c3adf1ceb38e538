//! Departures from a stop

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::location::Stop;

/// Company operating a line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub kind: String,
    pub id: String,
    pub name: String,
}

/// Line serving a departure (e.g. "S5", "U2", "M10")
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: String,
    pub id: String,
    /// Trip number within the operator's timetable
    pub fahrt_nr: String,
    /// Display name
    pub name: String,
    pub public: bool,
    /// Transport mode (e.g. "train", "bus")
    pub mode: String,
    /// Product category (e.g. "suburban", "subway", "bus")
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr: Option<i64>,
    pub metro: bool,
    pub express: bool,
    pub night: bool,
}

/// Free-text hint or warning attached to a departure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub kind: String,
    pub code: String,
    pub text: String,
}

/// Punctuality of a departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayStatus {
    OnTime,
    Late,
    Early,
}

/// One departure event at a stop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    pub trip_id: String,
    /// The stop the vehicle departs from
    pub stop: Stop,
    /// Real-time departure, `None` for cancelled trips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<DateTime<Utc>>,
    /// Destination text shown on the vehicle
    pub direction: String,
    pub line: Line,
    pub remarks: Vec<Remark>,
    /// Delay in seconds; positive is late, negative is early
    pub delay: i64,
    pub platform: String,
}

impl Departure {
    /// Copy of this departure with surrounding whitespace removed from the
    /// line name, product and direction
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut dep = self.clone();
        dep.line.name = dep.line.name.trim().to_string();
        dep.line.product = dep.line.product.trim().to_string();
        dep.direction = dep.direction.trim().to_string();
        dep
    }

    /// Whether the departure time lies within `[from, until]`, both inclusive
    #[must_use]
    pub fn departs_between(&self, from: DateTime<Utc>, until: DateTime<Utc>) -> bool {
        self.when.is_some_and(|when| when >= from && when <= until)
    }

    #[must_use]
    pub const fn delay_status(&self) -> DelayStatus {
        match self.delay {
            0 => DelayStatus::OnTime,
            d if d > 0 => DelayStatus::Late,
            _ => DelayStatus::Early,
        }
    }

    /// Delay in whole minutes, truncated toward zero
    #[must_use]
    pub const fn delay_minutes(&self) -> i64 {
        self.delay / 60
    }

    /// `HH:MM` in the given zone, followed by ` (+N)` / ` (-N)` minutes when delayed or early
    ///
    /// Returns `None` when the departure has no time.
    #[must_use]
    pub fn time_label<Tz>(&self, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let clock = self.when?.with_timezone(tz).format("%H:%M");
        Some(match self.delay_status() {
            DelayStatus::OnTime => clock.to_string(),
            _ => format!("{clock} ({:+})", self.delay_minutes()),
        })
    }
}
