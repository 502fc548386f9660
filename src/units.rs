//! Unit conversions used by the decoder.
//!
//! All conversions are pure and total over finite inputs. NaN propagates
//! unchanged; rendering code is responsible for turning it into a sentinel.

use crate::constants::{FEET_PER_METER, INHG_PER_HPA};

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert hectopascals to inches of mercury
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * INHG_PER_HPA
}

/// Convert meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}
