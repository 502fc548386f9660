//! Display formatting for decoded reports
//!
//! The decoder works with typed optional readings; this module is where they
//! become text. Absent values are rendered with fixed sentinels:
//!
//! | Field                              | Sentinel        |
//! |------------------------------------|-----------------|
//! | numbers (visibility, temperature…) | `---`           |
//! | time, station, name                | `Unknown`       |
//! | ceiling (no BKN/OVC layer)         | `None`          |
//! | pressure / density altitude        | `unavailable`   |
//! | relative humidity / air density    | `Not available` |

use serde::Serialize;
use std::fmt;

use crate::analysis::DerivedMetrics;
use crate::config::{PressureUnit, TemperatureUnit};
use crate::constants::sentinels::{MISSING, NO_CEILING, NOT_AVAILABLE, UNAVAILABLE, UNKNOWN};
use crate::decoder::StationReport;
use crate::models::{
    Altimeter, Ceiling, ObservationTime, TemperaturePair, VisibilityField, Wind, WindKind,
};

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WindKind::Calm => f.write_str("Calm")?,
            WindKind::Variable { speed_kt } => {
                write!(f, "Variable at {} knots", number_or_missing(speed_kt))?
            }
            WindKind::Directional {
                direction_deg,
                speed_kt,
            } => write!(f, "{}° at {} knots", direction_deg, speed_kt)?,
        }

        if let Some(gust) = self.gust_kt {
            write!(f, ", gusting to {} knots", gust)?;
        }
        Ok(())
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} UTC", self.hour, self.minute)
    }
}

impl fmt::Display for VisibilityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text.trim()),
        }
    }
}

impl fmt::Display for Ceiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str(NO_CEILING),
            Self::Layer { base_ft, .. } => write!(f, "{} feet", number_or_missing(*base_ft)),
        }
    }
}

/// Time of day, or `Unknown`
pub fn time_text(time: Option<&ObservationTime>) -> String {
    time.map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

/// Visibility in statute miles, `--- statute miles` if absent
pub fn visibility_text(visibility: Option<&VisibilityField>) -> String {
    match visibility {
        Some(v) => format!("{} statute miles", v),
        None => format!("{} statute miles", MISSING),
    }
}

/// Elevation rounded to whole feet with thousands separators
pub fn elevation_text(elevation_ft: Option<f64>) -> String {
    match elevation_ft.filter(|v| v.is_finite()) {
        Some(ft) => format!("{} feet", group_thousands(ft.round() as i64)),
        None => format!("{} feet", MISSING),
    }
}

pub fn celsius_text(pair: &TemperaturePair) -> String {
    match pair.celsius {
        Some(c) => format!("{:.1}°C", c),
        None => format!("{}°C", MISSING),
    }
}

pub fn fahrenheit_text(pair: &TemperaturePair) -> String {
    match pair.fahrenheit {
        Some(f) => format!("{:.1}°F", f),
        None => format!("{}°F", MISSING),
    }
}

/// Temperature in the requested unit
pub fn temperature_text(pair: &TemperaturePair, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => celsius_text(pair),
        TemperatureUnit::Fahrenheit => fahrenheit_text(pair),
    }
}

pub fn hpa_text(altimeter: &Altimeter) -> String {
    format!("{} hPa", number_or_missing(altimeter.hpa))
}

pub fn inhg_text(altimeter: &Altimeter) -> String {
    match altimeter.inhg {
        Some(inhg) => format!("{:.2} inHg", inhg),
        None => format!("{} inHg", MISSING),
    }
}

/// Altimeter in the requested unit
pub fn altimeter_text(altimeter: &Altimeter, unit: PressureUnit) -> String {
    match unit {
        PressureUnit::InHg => inhg_text(altimeter),
        PressureUnit::HPa => hpa_text(altimeter),
    }
}

/// Pressure or density altitude, `unavailable` if not computed
pub fn altitude_text(altitude_ft: Option<i64>) -> String {
    match altitude_ft {
        Some(ft) => format!("{} feet", group_thousands(ft)),
        None => UNAVAILABLE.to_string(),
    }
}

pub fn humidity_text(relative_humidity_pct: Option<i64>) -> String {
    match relative_humidity_pct {
        Some(rh) => format!("{}%", rh),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn air_density_text(air_density_kg_m3: Option<f64>) -> String {
    match air_density_kg_m3 {
        Some(rho) => format!("{:.3} kg/m³", rho),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn number_or_missing(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

// =============================================================================
// Rendered Output
// =============================================================================

/// A value shown in two units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPair {
    pub primary: String,
    pub alternate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMetrics {
    pub pressure_altitude: String,
    pub density_altitude: String,
    pub relative_humidity: String,
    pub air_density: String,
}

impl RenderedMetrics {
    pub fn new(metrics: &DerivedMetrics) -> Self {
        Self {
            pressure_altitude: altitude_text(metrics.pressure_altitude_ft),
            density_altitude: altitude_text(metrics.density_altitude_ft),
            relative_humidity: humidity_text(metrics.relative_humidity_pct),
            air_density: air_density_text(metrics.air_density_kg_m3),
        }
    }
}

/// Station report rendered to display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub station: String,
    pub name: String,
    pub raw: String,
    pub elevation: String,
    pub time: String,
    pub wind: String,
    pub visibility: String,
    pub ceiling: String,
    pub temperature: RenderedPair,
    pub dewpoint: RenderedPair,
    pub altimeter: RenderedPair,
    pub flight_category: String,
    pub metrics: RenderedMetrics,
}

impl RenderedReport {
    pub fn new(
        station_report: &StationReport,
        temperature_unit: TemperatureUnit,
        pressure_unit: PressureUnit,
    ) -> Self {
        let report = &station_report.report;
        let temperature_pair = |pair: &TemperaturePair| RenderedPair {
            primary: temperature_text(pair, temperature_unit),
            alternate: temperature_text(pair, temperature_unit.toggled()),
        };

        Self {
            station: report.station.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            name: report.name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            raw: report.raw_text.clone(),
            elevation: elevation_text(report.elevation_ft),
            time: time_text(report.time.as_ref()),
            wind: report.wind.to_string(),
            visibility: visibility_text(report.visibility.as_ref()),
            ceiling: report.ceiling.to_string(),
            temperature: temperature_pair(&report.temperature),
            dewpoint: temperature_pair(&report.dewpoint),
            altimeter: RenderedPair {
                primary: altimeter_text(&report.altimeter, pressure_unit),
                alternate: altimeter_text(&report.altimeter, pressure_unit.toggled()),
            },
            flight_category: station_report.flight_category.label().to_string(),
            metrics: RenderedMetrics::new(&station_report.metrics),
        }
    }
}
