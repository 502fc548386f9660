//! Command implementations for the METAR decoder CLI
//!
//! This module contains the command execution logic, logging setup and
//! terminal output for the CLI interface.

use crate::analysis::FlightCategory;
use crate::cli::args::{Args, Commands, DecodeArgs, OutputFormat};
use crate::decoder::MetarDecoder;
use crate::render::{RenderedPair, RenderedReport};
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Write;
use tracing::{debug, info};

/// Main command runner
///
/// Returns the number of station reports decoded.
pub fn run(args: Args) -> Result<usize> {
    match args.command {
        Some(Commands::Decode(decode_args)) => run_decode(&decode_args),
        Some(Commands::Categories) => {
            print!("{}", format_categories());
            Ok(0)
        }
        None => Ok(0),
    }
}

/// Decode every station report in the input and print it
pub fn run_decode(args: &DecodeArgs) -> Result<usize> {
    setup_logging(args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.build_config().context("Failed to load configuration")?;
    debug!("Using configuration: {:?}", config);

    if args.reads_stdin() {
        info!("Reading METAR JSON from stdin");
    }
    let input = args.read_input().context("Failed to read METAR input")?;

    let decoder = MetarDecoder::new(&config);
    let reports = decoder
        .analyze_response(&input)
        .context("Failed to decode METAR response")?;

    let rendered: Vec<RenderedReport> = reports
        .iter()
        .map(|report| RenderedReport::new(report, config.temperature_unit, config.pressure_unit))
        .collect();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rendered)
                .context("Failed to serialize decoded reports")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for (report, station) in rendered.iter().zip(&reports) {
                print!("{}", format_report_text(report, station.flight_category));
            }
        }
    }

    Ok(reports.len())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &DecodeArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Color a flight category label the way charts do
pub fn colorize_category(category: FlightCategory) -> ColoredString {
    let label = category.label().bold();
    match category {
        FlightCategory::Vfr => label.green(),
        FlightCategory::Mvfr => label.blue(),
        FlightCategory::Ifr => label.red(),
        FlightCategory::Lifr => label.magenta(),
    }
}

/// Render one station report as a text block
pub fn format_report_text(report: &RenderedReport, category: FlightCategory) -> String {
    let mut out = String::new();
    let row = |out: &mut String, label: &str, value: &str| {
        let _ = writeln!(out, "  {:<20}{}", label.bright_black(), value);
    };

    let _ = writeln!(
        out,
        "{} {}",
        report.station.bright_cyan().bold(),
        format!("({})", report.name).bright_black()
    );
    let _ = writeln!(out, "  {}", report.raw.bright_white());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Decoded Information".bright_green().bold());
    row(&mut out, "Station", &report.station);
    row(&mut out, "Time", &report.time);
    row(&mut out, "Wind", &report.wind);
    row(&mut out, "Visibility", &report.visibility);
    row(&mut out, "Ceiling", &report.ceiling);
    row(&mut out, "Elevation", &report.elevation);
    row(&mut out, "Temperature", &paired(&report.temperature));
    row(&mut out, "Dewpoint", &paired(&report.dewpoint));
    row(&mut out, "Altimeter", &paired(&report.altimeter));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Additional Information".bright_green().bold());
    row(&mut out, "Pressure Altitude", &report.metrics.pressure_altitude);
    row(&mut out, "Density Altitude", &report.metrics.density_altitude);
    row(&mut out, "Relative Humidity", &report.metrics.relative_humidity);
    row(&mut out, "Air Density", &report.metrics.air_density);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} {}",
        "Flight Category:".bright_green().bold(),
        colorize_category(category)
    );
    let _ = writeln!(out, "  {}", category.criteria().bright_black());
    let _ = writeln!(out);

    out
}

/// The criteria table for all flight categories
pub fn format_categories() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Flight categories:".bright_green().bold());
    for category in FlightCategory::ALL {
        let _ = writeln!(
            out,
            "  {:<6} {}",
            colorize_category(category),
            category.criteria()
        );
    }
    out
}

fn paired(pair: &RenderedPair) -> String {
    format!("{} {}", pair.primary, format!("({})", pair.alternate).bright_black())
}
