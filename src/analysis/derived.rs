//! Secondary atmospheric quantities derived from a decoded report
//!
//! Every metric is gated on an authoritative altimeter reading. Without one,
//! none of them is computed, so a stale or partial value is never reported.

use serde::Serialize;

use crate::constants::{PA_PER_INHG, atmosphere};
use crate::models::DecodedReport;

/// Pressure altitude, density altitude, relative humidity and air density
///
/// `None` means the metric could not be computed from the available inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub pressure_altitude_ft: Option<i64>,
    pub density_altitude_ft: Option<i64>,
    pub relative_humidity_pct: Option<i64>,
    /// kg/m³, rounded to three decimal places
    pub air_density_kg_m3: Option<f64>,
}

impl DerivedMetrics {
    /// Compute all metrics for a decoded report
    pub fn from_report(report: &DecodedReport) -> Self {
        Self::compute(
            report.altimeter.inhg,
            report.elevation_ft,
            report.temperature.celsius,
            report.dewpoint.celsius,
        )
    }

    /// Compute all metrics from individual inputs
    pub fn compute(
        altimeter_inhg: Option<f64>,
        elevation_ft: Option<f64>,
        temperature_c: Option<f64>,
        dewpoint_c: Option<f64>,
    ) -> Self {
        let Some(altimeter_inhg) = altimeter_inhg.filter(|v| v.is_finite()) else {
            return Self::default();
        };

        let pressure_altitude = elevation_ft.and_then(|elev| pressure_altitude(altimeter_inhg, elev));
        let density_altitude = match (pressure_altitude, temperature_c) {
            (Some(pa), Some(temp)) => density_altitude(pa, temp),
            _ => None,
        };
        let relative_humidity = match (temperature_c, dewpoint_c) {
            (Some(temp), Some(dewp)) => relative_humidity(temp, dewp),
            _ => None,
        };

        Self {
            pressure_altitude_ft: pressure_altitude,
            density_altitude_ft: density_altitude,
            relative_humidity_pct: relative_humidity,
            air_density_kg_m3: temperature_c.and_then(|temp| air_density(altimeter_inhg, temp)),
        }
    }

    /// Whether any metric could be computed
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Pressure altitude in feet: `round((29.92 - altimeter) * 1000 + elevation)`
pub fn pressure_altitude(altimeter_inhg: f64, elevation_ft: f64) -> Option<i64> {
    let pa = (atmosphere::STANDARD_PRESSURE_INHG - altimeter_inhg) * atmosphere::FEET_PER_INHG
        + elevation_ft;
    round_finite(pa)
}

/// ISA temperature in °C at a given pressure altitude
pub fn isa_temperature(pressure_altitude_ft: f64) -> f64 {
    atmosphere::ISA_SEA_LEVEL_TEMP_C
        - (pressure_altitude_ft / 1000.0) * atmosphere::ISA_LAPSE_RATE_C_PER_1000FT
}

/// Density altitude in feet, 120 ft per °C above ISA
pub fn density_altitude(pressure_altitude_ft: i64, temperature_c: f64) -> Option<i64> {
    let pa = pressure_altitude_ft as f64;
    let isa = isa_temperature(pa);
    round_finite(pa + atmosphere::DENSITY_ALTITUDE_FT_PER_C * (temperature_c - isa))
}

/// Saturation vapor pressure in hPa (Magnus form)
pub fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    atmosphere::MAGNUS_BASE_HPA
        * ((atmosphere::MAGNUS_A * temperature_c) / (atmosphere::MAGNUS_B_C + temperature_c)).exp()
}

/// Relative humidity in whole percent
pub fn relative_humidity(temperature_c: f64, dewpoint_c: f64) -> Option<i64> {
    let es = saturation_vapor_pressure(temperature_c);
    let e = saturation_vapor_pressure(dewpoint_c);
    round_finite(100.0 * e / es)
}

/// Air density in kg/m³ from altimeter and temperature, rounded to 3 decimals
pub fn air_density(altimeter_inhg: f64, temperature_c: f64) -> Option<f64> {
    let pressure_pa = altimeter_inhg * PA_PER_INHG;
    let temperature_k = temperature_c + atmosphere::KELVIN_OFFSET;
    let density = pressure_pa / (atmosphere::DRY_AIR_GAS_CONSTANT * temperature_k);
    density
        .is_finite()
        .then(|| (density * 1000.0).round() / 1000.0)
}

// Halves round toward positive infinity, so -1500.5 ft becomes -1500.
fn round_finite(value: f64) -> Option<i64> {
    value.is_finite().then(|| (value + 0.5).floor() as i64)
}
