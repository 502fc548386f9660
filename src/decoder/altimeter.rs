//! Altimeter reconciliation
//!
//! The service reports the altimeter in hPa while the METAR text carries an
//! `A####` group in hundredths of inHg. The coded value is authoritative only
//! when the two agree within tolerance. There is no fallback to the
//! converted hPa value: a disagreement means the altimeter is unavailable.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::constants::{ALTIMETER_GROUP_SCALE, DEFAULT_ALTIMETER_TOLERANCE_INHG};
use crate::units::hpa_to_inhg;

static ALTIMETER_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bA(?P<hundredths>\d{4})").expect("altimeter group pattern is a valid regex")
});

/// Outcome of cross-checking the coded altimeter against the hPa reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AltimeterCheck {
    /// Both readings agree; carries the coded value in inHg
    Accepted { inhg: f64 },
    /// Readings differ by more than the tolerance
    Disagreement { coded_inhg: f64, reported_inhg: f64 },
    /// The raw text has no `A####` group
    MissingGroup,
    /// The group is present but no usable hPa value was reported
    MissingReading { coded_inhg: f64 },
}

impl AltimeterCheck {
    /// The authoritative altimeter in inHg, if the check passed
    pub fn inhg(&self) -> Option<f64> {
        match self {
            Self::Accepted { inhg } => Some(*inhg),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Cross-validates the coded altimeter group against a reported hPa value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltimeterReconciler {
    tolerance_inhg: f64,
}

impl Default for AltimeterReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_ALTIMETER_TOLERANCE_INHG)
    }
}

impl AltimeterReconciler {
    pub fn new(tolerance_inhg: f64) -> Self {
        Self { tolerance_inhg }
    }

    pub fn tolerance_inhg(&self) -> f64 {
        self.tolerance_inhg
    }

    /// Reconcile the raw METAR text with the service's hPa reading
    pub fn reconcile(&self, raw_text: &str, reported_hpa: Option<f64>) -> AltimeterCheck {
        let Some(coded_inhg) = extract_altimeter_group(raw_text) else {
            debug!("No altimeter group in '{}'", raw_text);
            return AltimeterCheck::MissingGroup;
        };

        let Some(reported_inhg) = reported_hpa.map(hpa_to_inhg).filter(|v| v.is_finite()) else {
            debug!(
                "Altimeter group A{:.0} present but no hPa reading to confirm it",
                coded_inhg * ALTIMETER_GROUP_SCALE
            );
            return AltimeterCheck::MissingReading { coded_inhg };
        };

        let difference = (coded_inhg - reported_inhg).abs();
        if difference <= self.tolerance_inhg {
            AltimeterCheck::Accepted { inhg: coded_inhg }
        } else {
            warn!(
                "Altimeter disagreement: coded {:.2} inHg vs reported {:.2} inHg (diff {:.3} > {:.3})",
                coded_inhg, reported_inhg, difference, self.tolerance_inhg
            );
            AltimeterCheck::Disagreement {
                coded_inhg,
                reported_inhg,
            }
        }
    }
}

/// Parse the first `A####` group as inHg
pub fn extract_altimeter_group(raw_text: &str) -> Option<f64> {
    let caps = ALTIMETER_GROUP.captures(raw_text)?;
    let hundredths = caps.name("hundredths")?.as_str().parse::<u32>().ok()?;
    Some(f64::from(hundredths) / ALTIMETER_GROUP_SCALE)
}
