//! One run of the departure board
//!
//! Modes are tried in order: station search, nearby stops, then the board
//! itself. Messages go to `out`, error causes to `err`.

use std::io::Write;
use std::process::ExitCode;

use application::{
    ApplicationError, DEFAULT_STOP_ID, DepartureBoard, DepartureService, StationChoice,
    StationPicker,
};
use chrono::{Local, Utc};
use domain::DomainError;
use tracing::{debug, info};

use crate::cli::Settings;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Failure => Self::FAILURE,
        }
    }
}

/// Run the mode selected by `settings`
///
/// # Errors
///
/// Only fails when writing to `out` or `err` fails. Remote failures are
/// reported on the writers and turned into [`Outcome::Failure`].
pub async fn run<O, E>(
    settings: &Settings,
    service: &DepartureService,
    picker: &dyn StationPicker,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<Outcome>
where
    O: Write,
    E: Write,
{
    if let Some(term) = &settings.search {
        return list_stations(service, term, out, err).await;
    }

    if let Some(location) = settings.near {
        return match service.stops_nearby(location).await {
            Ok(stops) => {
                writeln!(out, "Found {} stop(s) nearby:", stops.len())?;
                for stop in &stops {
                    writeln!(out, "  {stop}")?;
                }
                Ok(Outcome::Success)
            },
            Err(e) => {
                writeln!(out, "Could not query nearby stops")?;
                writeln!(err, "Error: {e}")?;
                Ok(Outcome::Failure)
            },
        };
    }

    let stop_id = resolve_stop_id(settings, service, picker, out).await?;

    let departures = match service
        .fetch_departures(&stop_id, settings.duration_minutes, &settings.retry)
        .await
    {
        Ok(departures) => departures,
        Err(e) => {
            writeln!(out, "Could not query departures")?;
            writeln!(err, "Error: {e}")?;
            return Ok(Outcome::Failure);
        },
    };

    let board = DepartureBoard::build(
        &departures,
        &settings.filter,
        settings.width,
        Utc::now(),
        &Local,
    );
    debug!(received = departures.len(), shown = board.rows().len(), "Board built");

    for line in board.render(settings.color) {
        writeln!(out, "{line}")?;
    }

    Ok(Outcome::Success)
}

async fn list_stations<O: Write, E: Write>(
    service: &DepartureService,
    term: &str,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<Outcome> {
    match service.search_stations(term).await {
        Ok(stations) => {
            writeln!(out, "Found {} station(s):", stations.len())?;
            for station in &stations {
                writeln!(out, "  {station}")?;
            }
            Ok(Outcome::Success)
        },
        Err(e) => {
            writeln!(out, "Could not query stations")?;
            writeln!(err, "Error: {e}")?;
            Ok(Outcome::Failure)
        },
    }
}

/// The explicit id, else the station chosen by name, else the default stop
async fn resolve_stop_id<O: Write>(
    settings: &Settings,
    service: &DepartureService,
    picker: &dyn StationPicker,
    out: &mut O,
) -> anyhow::Result<String> {
    let mut stop_id = settings.stop_id.clone();

    if stop_id.is_none() {
        if let Some(name) = &settings.station {
            match service.resolve_station(name, picker).await {
                Ok(StationChoice::Picked(stop)) => stop_id = Some(stop.id),
                Ok(StationChoice::Fallback(stop)) => {
                    writeln!(out, "Failed to get answer on station list. Defaulting to {}", stop.name)?;
                    stop_id = Some(stop.id);
                },
                Err(ApplicationError::Domain(DomainError::NotFound { .. })) => {
                    writeln!(out, "could not find matching stations")?;
                },
                Err(e) => {
                    debug!(error = %e, "Station search failed");
                    writeln!(out, "could not query stations")?;
                },
            }
        }
    }

    match stop_id.filter(|id| !id.is_empty()) {
        Some(id) => Ok(id),
        None => {
            writeln!(out, "station ID is empty. Defaulting to: {DEFAULT_STOP_ID}")?;
            info!(id = DEFAULT_STOP_ID, "Using default stop");
            Ok(DEFAULT_STOP_ID.to_string())
        },
    }
}
