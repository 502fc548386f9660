//! Command-line argument definitions for the METAR decoder
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{DecoderConfig, PressureUnit, TemperatureUnit};
use crate::error::{DecodeError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

/// CLI arguments for the METAR decoder
///
/// Decodes METAR reports from the aviation weather service's JSON format
/// into readable fields, derived metrics and a flight category.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode METAR aviation weather reports and classify flight category",
    long_about = "Reads the JSON response of the aviation weather METAR API \
                  (https://aviationweather.gov/api/data/metar?ids=KJFK&format=json) from a file \
                  or stdin and decodes each station report: wind, visibility, ceiling, \
                  temperatures, reconciled altimeter, pressure and density altitude, relative \
                  humidity, air density and the VFR/MVFR/IFR/LIFR flight category."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode METAR JSON from a file or stdin
    Decode(DecodeArgs),
    /// Print the flight category criteria
    Categories,
}

/// Output format for decoded reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Rendered fields as JSON
    Json,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// JSON file with the METAR API response (stdin if omitted or '-')
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Temperature unit shown first (overrides config file)
    #[arg(long = "temp-unit", value_enum, value_name = "UNIT")]
    pub temperature_unit: Option<TemperatureUnit>,

    /// Altimeter unit shown first (overrides config file)
    #[arg(long = "altimeter-unit", value_enum, value_name = "UNIT")]
    pub pressure_unit: Option<PressureUnit>,

    /// Maximum allowed difference between coded and reported altimeter, in inHg
    #[arg(long = "altimeter-tolerance", value_name = "INHG")]
    pub altimeter_tolerance: Option<f64>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl DecodeArgs {
    /// Get the log level string for tracing configuration
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the decoder configuration: file (if any), then CLI overrides
    pub fn build_config(&self) -> Result<DecoderConfig> {
        let mut config = match &self.config_file {
            Some(path) => DecoderConfig::from_file(path)?,
            None => DecoderConfig::default(),
        };

        if let Some(unit) = self.temperature_unit {
            config = config.with_temperature_unit(unit);
        }
        if let Some(unit) = self.pressure_unit {
            config = config.with_pressure_unit(unit);
        }
        if let Some(tolerance) = self.altimeter_tolerance {
            config = config.with_altimeter_tolerance(tolerance);
        }

        config.validate()?;
        Ok(config)
    }

    /// Whether input comes from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }

    /// Read the raw JSON input
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if !self.reads_stdin() => {
                if !path.exists() {
                    return Err(DecodeError::InputNotFound { path: path.clone() });
                }
                Ok(std::fs::read_to_string(path)?)
            }
            _ => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}
