//! Field extraction from a raw observation record
//!
//! Each extractor handles one semantic field and never fails: missing or
//! unparseable inputs degrade to `None`/calm/unlimited, which the render
//! layer turns into the documented sentinels.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{
    Ceiling, CloudLayer, ObservationTime, RawObservation, TemperaturePair, VisibilityField, Wind,
    WindDirection, WindKind,
};
use crate::units::{celsius_to_fahrenheit, meters_to_feet};

static TIME_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z")
        .expect("time group pattern is a valid regex")
});

/// Decode wind from direction, speed and gust
///
/// A non-zero speed with a numeric direction is directional; zero speed at
/// zero degrees is calm; a variable direction is variable at whatever speed
/// was reported. Every other combination falls back to calm. A non-zero
/// gust is attached whichever branch applies.
pub fn extract_wind(
    direction: Option<WindDirection>,
    speed_kt: Option<f64>,
    gust_kt: Option<f64>,
) -> Wind {
    let speed = speed_kt.filter(|s| !s.is_nan());

    let kind = match (direction, speed) {
        (Some(WindDirection::Degrees(deg)), Some(spd)) if spd != 0.0 => WindKind::Directional {
            direction_deg: deg,
            speed_kt: spd,
        },
        (Some(WindDirection::Variable), spd) => WindKind::Variable { speed_kt: spd },
        (direction, speed) => {
            if !(speed == Some(0.0) && direction == Some(WindDirection::Degrees(0.0))) {
                debug!(
                    "Wind direction {:?} with speed {:?} has no directional reading, reporting calm",
                    direction, speed
                );
            }
            WindKind::Calm
        }
    };

    Wind {
        kind,
        gust_kt: gust_kt.filter(|g| *g != 0.0 && !g.is_nan()),
    }
}

/// Extract the `DDHHMMZ` observation time group from the raw text
pub fn extract_time(raw_text: &str) -> Option<ObservationTime> {
    let caps = TIME_GROUP.captures(raw_text)?;
    let field = |name: &str| caps.name(name)?.as_str().parse::<u32>().ok();

    Some(ObservationTime {
        day: field("day")?,
        hour: field("hour")?,
        minute: field("minute")?,
    })
}

/// Visibility as reported, `None` if absent or blank
pub fn extract_visibility(visibility: Option<&VisibilityField>) -> Option<VisibilityField> {
    visibility.filter(|v| !v.is_blank()).cloned()
}

/// The first broken or overcast layer in report order
///
/// Report order is assumed altitude-ascending but not relied upon: a lower
/// layer listed later does not replace an earlier qualifying one.
pub fn extract_ceiling(clouds: &[CloudLayer]) -> Ceiling {
    clouds
        .iter()
        .find(|layer| layer.cover.forms_ceiling())
        .map_or(Ceiling::Unlimited, |layer| Ceiling::Layer {
            cover: layer.cover.clone(),
            base_ft: layer.base.filter(|b| !b.is_nan()),
        })
}

/// Station elevation in feet
pub fn extract_elevation_ft(elevation_m: Option<f64>) -> Option<f64> {
    elevation_m.map(meters_to_feet).filter(|ft| !ft.is_nan())
}

/// Pair a Celsius reading with its Fahrenheit equivalent
pub fn extract_temperature(celsius: Option<f64>) -> TemperaturePair {
    let celsius = celsius.filter(|c| !c.is_nan());
    TemperaturePair {
        celsius,
        fahrenheit: celsius.map(celsius_to_fahrenheit),
    }
}

/// Ceiling and visibility as used for flight category classification
///
/// Built straight from the raw record rather than from a decoded report.
/// `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationInput {
    pub ceiling_ft: Option<f64>,
    pub visibility_sm: Option<f64>,
}

impl ClassificationInput {
    pub fn from_observation(observation: &RawObservation) -> Self {
        Self {
            ceiling_ft: extract_ceiling(&observation.clouds).height_ft(),
            visibility_sm: observation
                .visib
                .as_ref()
                .and_then(VisibilityField::statute_miles),
        }
    }
}
