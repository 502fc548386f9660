//! Core data structures for METAR decoding.
//!
//! [`RawObservation`] mirrors the per-station JSON record returned by the
//! aviation weather service. Loosely typed upstream fields (wind direction as
//! number-or-`"VRB"`, visibility as number-or-string) are modelled as tagged
//! variants at the deserialization boundary. The remaining types make up the
//! decoded output and carry typed optionals rather than pre-rendered text.

use crate::constants::VARIABLE_WIND_CODE;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

// =============================================================================
// Upstream Observation Record
// =============================================================================

/// One station report as delivered by the aviation weather service
///
/// Every field is optional at this level; the decoder decides which absences
/// are fatal (only `rawOb`) and which degrade to sentinels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawObservation {
    /// Full METAR text line, e.g. `"KJFK 121851Z 18010G18KT 10SM BKN025 15/05 A2992"`
    #[serde(rename = "rawOb", default)]
    pub raw_ob: Option<String>,

    /// Human-readable station name
    #[serde(default)]
    pub name: Option<String>,

    /// ICAO station identifier
    #[serde(rename = "icaoId", default)]
    pub icao_id: Option<String>,

    /// Station elevation in meters
    #[serde(default)]
    pub elev: Option<f64>,

    /// Wind direction in degrees true, or the variable sentinel
    #[serde(default, deserialize_with = "deserialize_wind_direction")]
    pub wdir: Option<WindDirection>,

    /// Wind speed in knots
    #[serde(default)]
    pub wspd: Option<f64>,

    /// Gust speed in knots
    #[serde(default)]
    pub wgst: Option<f64>,

    /// Prevailing visibility in statute miles
    #[serde(default)]
    pub visib: Option<VisibilityField>,

    /// Air temperature in degrees Celsius
    #[serde(default)]
    pub temp: Option<f64>,

    /// Dewpoint in degrees Celsius
    #[serde(default)]
    pub dewp: Option<f64>,

    /// Altimeter setting in hPa
    #[serde(default)]
    pub altim: Option<f64>,

    /// Cloud layers in report order
    #[serde(default, deserialize_with = "deserialize_clouds")]
    pub clouds: Vec<CloudLayer>,
}

impl RawObservation {
    /// Raw METAR text, if the record carries a non-blank one
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_ob
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// =============================================================================
// Wind Direction
// =============================================================================

/// Wind direction as reported upstream
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum WindDirection {
    /// Direction in degrees true
    Degrees(f64),
    /// Variable direction (`"VRB"`)
    Variable,
}

impl WindDirection {
    /// Interpret an upstream direction code; unknown codes are treated as absent
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.eq_ignore_ascii_case(VARIABLE_WIND_CODE) {
            Some(Self::Variable)
        } else {
            code.parse::<f64>().ok().map(Self::Degrees)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WindDirectionField {
    Degrees(f64),
    Code(String),
}

fn deserialize_wind_direction<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<WindDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<WindDirectionField>::deserialize(deserializer)?;
    Ok(field.and_then(|field| match field {
        WindDirectionField::Degrees(deg) => Some(WindDirection::Degrees(deg)),
        WindDirectionField::Code(code) => WindDirection::from_code(&code),
    }))
}

// =============================================================================
// Visibility
// =============================================================================

static VISIBILITY_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[PM]?(?:(?P<whole>\d+(?:\.\d+)?)(?:\s+(?P<num>\d+)/(?P<den>\d+))?|(?P<fnum>\d+)/(?P<fden>\d+))\+?(?:\s*SM)?$",
    )
    .expect("visibility pattern is a valid regex")
});

/// Visibility as reported upstream: a number, or text such as `"10+"` or `"1 1/2"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisibilityField {
    Numeric(f64),
    Text(String),
}

impl VisibilityField {
    /// Visibility in statute miles, if it can be interpreted numerically
    ///
    /// `P` (more than) and `M` (less than) prefixes and a trailing `+` are
    /// dropped, so `"P6"` reads as 6 and `"M1/4"` as 0.25.
    pub fn statute_miles(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value).filter(|v| v.is_finite()),
            Self::Text(text) => parse_statute_miles(text),
        }
    }

    /// Whether the field carries nothing displayable
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(value) => value.is_nan(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

fn parse_statute_miles(text: &str) -> Option<f64> {
    let caps = VISIBILITY_PATTERN.captures(text.trim())?;

    let fraction = |num: &str, den: &str| -> Option<f64> {
        let num = num.parse::<f64>().ok()?;
        let den = den.parse::<f64>().ok()?;
        (den != 0.0).then(|| num / den)
    };

    if let (Some(num), Some(den)) = (caps.name("fnum"), caps.name("fden")) {
        return fraction(num.as_str(), den.as_str());
    }

    let whole = caps.name("whole")?.as_str().parse::<f64>().ok()?;
    match (caps.name("num"), caps.name("den")) {
        (Some(num), Some(den)) => fraction(num.as_str(), den.as_str()).map(|f| whole + f),
        _ => Some(whole),
    }
}

// =============================================================================
// Cloud Layers
// =============================================================================

/// Sky cover code of a cloud layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CloudCover {
    /// Sky clear (manual)
    Skc,
    /// Clear below 12,000 ft (automated)
    Clr,
    /// No significant cloud
    Nsc,
    /// No cloud detected
    Ncd,
    /// Few, 1-2 oktas
    Few,
    /// Scattered, 3-4 oktas
    Sct,
    /// Broken, 5-7 oktas
    Bkn,
    /// Overcast, 8 oktas
    Ovc,
    /// Obscured sky (vertical visibility)
    Ovx,
    /// Ceiling and visibility OK
    Cavok,
    /// Any other code, kept verbatim
    Unknown(String),
}

impl CloudCover {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SKC" => Self::Skc,
            "CLR" => Self::Clr,
            "NSC" => Self::Nsc,
            "NCD" => Self::Ncd,
            "FEW" => Self::Few,
            "SCT" => Self::Sct,
            "BKN" => Self::Bkn,
            "OVC" => Self::Ovc,
            "OVX" => Self::Ovx,
            "CAVOK" => Self::Cavok,
            _ => Self::Unknown(code.trim().to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Skc => "SKC",
            Self::Clr => "CLR",
            Self::Nsc => "NSC",
            Self::Ncd => "NCD",
            Self::Few => "FEW",
            Self::Sct => "SCT",
            Self::Bkn => "BKN",
            Self::Ovc => "OVC",
            Self::Ovx => "OVX",
            Self::Cavok => "CAVOK",
            Self::Unknown(code) => code,
        }
    }

    /// Only broken and overcast layers constitute a ceiling
    pub fn forms_ceiling(&self) -> bool {
        matches!(self, Self::Bkn | Self::Ovc)
    }
}

impl From<String> for CloudCover {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<CloudCover> for String {
    fn from(cover: CloudCover) -> Self {
        cover.code().to_string()
    }
}

/// A single reported cloud layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    pub cover: CloudCover,

    /// Layer base in feet above ground level
    #[serde(default)]
    pub base: Option<f64>,
}

impl CloudLayer {
    pub fn new(cover: CloudCover, base: Option<f64>) -> Self {
        Self { cover, base }
    }
}

fn deserialize_clouds<'de, D>(deserializer: D) -> std::result::Result<Vec<CloudLayer>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<CloudLayer>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Decoded Fields
// =============================================================================

/// Observation time from the `DDHHMMZ` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservationTime {
    /// Day of month as coded; not part of the displayed time
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ObservationTime {
    /// Resolve the group to a full UTC timestamp relative to `reference`
    ///
    /// Picks the most recent date with the coded day-of-month that is not
    /// after `reference`, looking back at most one month. Returns `None` for
    /// out-of-range fields (e.g. hour 25) or days the month does not have.
    pub fn resolve(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;

        let this_month = reference.date_naive().with_day(1)?;
        for month_start in [this_month, this_month.checked_sub_months(Months::new(1))?] {
            let Some(date) =
                NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), self.day)
            else {
                continue;
            };
            let candidate = Utc.from_utc_datetime(&date.and_time(time));
            if candidate <= reference {
                return Some(candidate);
            }
        }
        None
    }
}

/// Decoded wind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wind {
    pub kind: WindKind,

    /// Gust speed in knots; zero gusts are not reported
    pub gust_kt: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum WindKind {
    Calm,
    Variable { speed_kt: Option<f64> },
    Directional { direction_deg: f64, speed_kt: f64 },
}

/// Ceiling derived from the cloud layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ceiling {
    /// No broken or overcast layer reported
    Unlimited,
    /// First broken or overcast layer in report order
    Layer { cover: CloudCover, base_ft: Option<f64> },
}

impl Ceiling {
    /// Ceiling height in feet, `None` if unlimited or the layer base is unknown
    pub fn height_ft(&self) -> Option<f64> {
        match self {
            Self::Unlimited => None,
            Self::Layer { base_ft, .. } => *base_ft,
        }
    }
}

/// A temperature in both units; both sides are absent together
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePair {
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
}

/// Altimeter setting in both units
///
/// `hpa` is the service-reported value; `inhg` is the reconciled value from
/// the coded `A####` group and is only present when both agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Altimeter {
    pub hpa: Option<f64>,
    pub inhg: Option<f64>,
}

/// Decoded METAR report for one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedReport {
    pub station: Option<String>,
    pub name: Option<String>,
    pub raw_text: String,
    pub elevation_ft: Option<f64>,
    pub time: Option<ObservationTime>,
    pub wind: Wind,
    pub visibility: Option<VisibilityField>,
    pub ceiling: Ceiling,
    pub temperature: TemperaturePair,
    pub dewpoint: TemperaturePair,
    pub altimeter: Altimeter,
}
