mod config;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, debug, info};

use config::Config;
use report::Report;

const USAGE: &str = "Usage: trendfit <DATA_FILE>";

fn main() -> ExitCode {
    init_logging();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // clap renders help and version to stdout itself
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    match run(&config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<Report> {
    config.validate()?;

    let samples = io::read_samples(&config.data_file).context("Error reading data")?;
    info!(path = %config.data_file, n = samples.len(), "samples read");

    let report = Report::from_samples(&samples)
        .with_context(|| format!("Cannot fit trend to {}", config.data_file))?;
    debug!(
        slope = report.line.slope,
        intercept = report.line.intercept,
        correlation = report.correlation,
        "trend computed"
    );

    Ok(report)
}

/// Diagnostics go to stderr so stdout carries only the report. The level is
/// fixed; the tool reads no environment variables.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();
}
