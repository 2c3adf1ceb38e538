//! departures
//!
//! Shows upcoming departures of a Berlin or Brandenburg stop in the terminal.

#![allow(clippy::print_stderr)]

use std::process::ExitCode;
use std::sync::Arc;

use application::DepartureService;
use clap::Parser;
use infrastructure::{DialoguerStationPicker, TransitAdapter};
use presentation_cli::{Cli, EnvSnapshot, log_filter_from_verbosity, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = cli.into_settings(&EnvSnapshot::capture());

    let adapter = match TransitAdapter::new(&settings.transit) {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };
    let service = DepartureService::new(Arc::new(adapter));
    let picker = DialoguerStationPicker::new();

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    match run(&settings, &service, &picker, &mut out, &mut err).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}
