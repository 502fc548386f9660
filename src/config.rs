//! Configuration management and validation.
//!
//! Provides the decoder configuration: altimeter agreement tolerance and the
//! preferred display units. Configuration can be loaded from a JSON file and
//! adjusted with builder methods; CLI flags are applied on top.

use crate::constants::DEFAULT_ALTIMETER_TOLERANCE_INHG;
use crate::error::{DecodeError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Primary temperature unit for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    #[value(name = "c", alias = "celsius")]
    Celsius,
    #[value(name = "f", alias = "fahrenheit")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// The other unit, as offered alongside the primary one
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

/// Primary altimeter unit for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[default]
    #[value(name = "inhg")]
    InHg,
    #[value(name = "hpa")]
    HPa,
}

impl PressureUnit {
    pub fn toggled(self) -> Self {
        match self {
            Self::InHg => Self::HPa,
            Self::HPa => Self::InHg,
        }
    }
}

/// Global configuration for METAR decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Maximum difference (inHg) between coded and reported altimeter
    pub altimeter_tolerance_inhg: f64,

    /// Temperature unit shown first
    pub temperature_unit: TemperatureUnit,

    /// Altimeter unit shown first
    pub pressure_unit: PressureUnit,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            altimeter_tolerance_inhg: DEFAULT_ALTIMETER_TOLERANCE_INHG,
            temperature_unit: TemperatureUnit::default(),
            pressure_unit: PressureUnit::default(),
        }
    }
}

impl DecoderConfig {
    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DecodeError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            DecodeError::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        config.validate()?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Set the altimeter agreement tolerance
    pub fn with_altimeter_tolerance(mut self, tolerance_inhg: f64) -> Self {
        self.altimeter_tolerance_inhg = tolerance_inhg;
        self
    }

    /// Set the primary temperature unit
    pub fn with_temperature_unit(mut self, unit: TemperatureUnit) -> Self {
        self.temperature_unit = unit;
        self
    }

    /// Set the primary altimeter unit
    pub fn with_pressure_unit(mut self, unit: PressureUnit) -> Self {
        self.pressure_unit = unit;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.altimeter_tolerance_inhg.is_finite() || self.altimeter_tolerance_inhg < 0.0 {
            return Err(DecodeError::configuration(format!(
                "Altimeter tolerance must be a non-negative number, got {}",
                self.altimeter_tolerance_inhg
            )));
        }

        if self.altimeter_tolerance_inhg > 1.0 {
            return Err(DecodeError::configuration(format!(
                "Altimeter tolerance of {} inHg is too loose to catch disagreements",
                self.altimeter_tolerance_inhg
            )));
        }

        Ok(())
    }
}
