//! Flight category classification from ceiling and visibility

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::flight_category::*;
use crate::decoder::extractor::ClassificationInput;

/// Flight category, most severe last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    /// Visual flight rules
    Vfr,
    /// Marginal VFR
    Mvfr,
    /// Instrument flight rules
    Ifr,
    /// Low IFR
    Lifr,
}

impl FlightCategory {
    pub const ALL: [FlightCategory; 4] = [Self::Vfr, Self::Mvfr, Self::Ifr, Self::Lifr];

    /// Classify from ceiling (ft) and visibility (SM); `None` means unbounded
    ///
    /// Rules are checked from most to least severe and the first match wins.
    /// Each rule trips on either condition alone.
    pub fn classify(ceiling_ft: Option<f64>, visibility_sm: Option<f64>) -> Self {
        let ceiling = ceiling_ft.unwrap_or(f64::INFINITY);
        let visibility = visibility_sm.unwrap_or(f64::INFINITY);

        if ceiling < LIFR_CEILING_FT || visibility < LIFR_VISIBILITY_SM {
            Self::Lifr
        } else if ceiling < IFR_CEILING_FT || visibility < IFR_VISIBILITY_SM {
            Self::Ifr
        } else if ceiling < MVFR_CEILING_FT || visibility < MVFR_VISIBILITY_SM {
            Self::Mvfr
        } else {
            Self::Vfr
        }
    }

    pub fn from_input(input: &ClassificationInput) -> Self {
        Self::classify(input.ceiling_ft, input.visibility_sm)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vfr => "VFR",
            Self::Mvfr => "MVFR",
            Self::Ifr => "IFR",
            Self::Lifr => "LIFR",
        }
    }

    /// Human-readable criteria line for this category
    pub fn criteria(&self) -> &'static str {
        match self {
            Self::Vfr => "VFR: Ceiling > 3000ft and Visibility > 5mi",
            Self::Mvfr => "MVFR: Ceiling 1000-3000ft or Visibility 3-5mi",
            Self::Ifr => "IFR: Ceiling 500-1000ft or Visibility 1-3mi",
            Self::Lifr => "LIFR: Ceiling < 500ft or Visibility < 1mi",
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VFR" => Ok(Self::Vfr),
            "MVFR" => Ok(Self::Mvfr),
            "IFR" => Ok(Self::Ifr),
            "LIFR" => Ok(Self::Lifr),
            other => Err(format!("Unknown flight category: {}", other)),
        }
    }
}
