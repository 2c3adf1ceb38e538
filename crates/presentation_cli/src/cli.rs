//! Command-line arguments and the settings resolved from them

use std::io::IsTerminal;
use std::time::Duration;

use application::{ColorMode, RetryPolicy};
use clap::Parser;
use domain::value_objects::{DepartureFilter, GeoLocation};
use integration_transit::TransitConfig;

/// Environment variable holding the widget width when `--width` is absent
pub const WIDTH_ENV: &str = "WTF_WIDGET_WIDTH";

/// Departure board for Berlin and Brandenburg public transport
#[derive(Debug, Parser)]
#[command(name = "departures")]
#[command(author, version, about = "Departure board for Berlin and Brandenburg public transport", long_about = None)]
pub struct Cli {
    /// Stop id to show departures for
    #[arg(long)]
    pub id: Option<String>,

    /// Only show these products (comma separated, e.g. "suburban,subway")
    #[arg(long, default_value = "")]
    pub filter_mode: String,

    /// Only show these directions (comma separated)
    #[arg(long, default_value = "")]
    pub filter_destination: String,

    /// Only show these lines (comma separated, e.g. "S1,U2")
    #[arg(long, default_value = "")]
    pub filter_line: String,

    /// Fixed total output width, 0 for natural width
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Retries after a failed departure request
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub retries: i64,

    /// Pause between two departure requests, e.g. "1s", "1.5s" or "500ms"
    #[arg(long, default_value = "1s", value_parser = parse_pause, allow_hyphen_values = true)]
    pub retry_pause: Duration,

    /// Minutes ahead to request departures for
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub min: u32,

    /// Colour the output even when stdout is not a terminal
    #[arg(long)]
    pub force_color: bool,

    /// List stations matching a name and exit
    #[arg(long)]
    pub search: Option<String>,

    /// Choose a station by name instead of passing --id
    #[arg(long)]
    pub station: Option<String>,

    /// List stops near a coordinate and exit
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub near: Option<GeoLocation>,

    /// Root of the location search API
    #[arg(long, env = "DEPARTURES_API_URL")]
    pub api_url: Option<String>,

    /// Root of the departures API
    #[arg(long, env = "DEPARTURES_BOARD_URL")]
    pub departures_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a human duration; anything negative counts as no pause
fn parse_pause(raw: &str) -> Result<Duration, humantime::DurationError> {
    let raw = raw.trim();
    if raw.starts_with('-') {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(raw).or_else(|err| fractional_duration(raw).ok_or(err))
}

/// A single fractional amount with a unit, such as "1.5s" or "0.25h"
fn fractional_duration(raw: &str) -> Option<Duration> {
    let split = raw.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (amount, unit) = raw.split_at(split);
    let amount: f64 = amount.parse().ok()?;
    let secs_per_unit = match unit.trim() {
        "ns" => 1e-9,
        "us" | "µs" => 1e-6,
        "ms" => 1e-3,
        "s" => 1.0,
        "m" => 60.0,
        "h" => 3600.0,
        _ => return None,
    };
    Duration::try_from_secs_f64(amount * secs_per_unit).ok()
}

/// Width from the widget environment variable, 0 when unset or unparsable
#[must_use]
pub fn width_from_env(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Parts of the process environment the settings depend on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub widget_width: Option<String>,
    pub no_color: bool,
    pub stdout_is_terminal: bool,
}

impl EnvSnapshot {
    #[must_use]
    pub fn capture() -> Self {
        Self {
            widget_width: std::env::var(WIDTH_ENV).ok(),
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }
}

/// Everything one run needs, resolved once from arguments and environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub stop_id: Option<String>,
    pub filter: DepartureFilter,
    /// `None` means natural column widths
    pub width: Option<usize>,
    pub retry: RetryPolicy,
    pub duration_minutes: u32,
    pub color: ColorMode,
    pub search: Option<String>,
    pub station: Option<String>,
    pub near: Option<GeoLocation>,
    pub transit: TransitConfig,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Cli {
    /// Resolve arguments against the environment
    #[must_use]
    pub fn into_settings(self, env: &EnvSnapshot) -> Settings {
        let width = self
            .width
            .unwrap_or_else(|| width_from_env(env.widget_width.as_deref()));

        let mut transit = TransitConfig::default();
        if let Some(url) = non_empty(self.api_url) {
            transit.base_url = url;
        }
        if let Some(url) = non_empty(self.departures_url) {
            transit.departures_base_url = url;
        }
        if let Some(secs) = self.timeout {
            transit.timeout_secs = secs;
        }

        Settings {
            stop_id: non_empty(self.id),
            filter: DepartureFilter::from_options(
                &self.filter_mode,
                &self.filter_destination,
                &self.filter_line,
            ),
            width: usize::try_from(width).ok().filter(|w| *w > 0),
            retry: RetryPolicy::clamped(self.retries, self.retry_pause),
            duration_minutes: self.min,
            color: ColorMode::resolve(self.force_color, env.stdout_is_terminal, env.no_color),
            search: non_empty(self.search),
            station: non_empty(self.station),
            near: self.near,
            transit,
        }
    }
}

/// Map verbosity level to a tracing filter
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
