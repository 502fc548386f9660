//! METAR decoding pipeline
//!
//! This module turns upstream observation records into decoded reports,
//! flight categories and derived metrics.
//!
//! ## Architecture
//!
//! - [`extractor`] - Per-field extraction (wind, time, visibility, ceiling, elevation)
//! - [`altimeter`] - Cross-check of the coded `A####` group against the hPa reading
//!
//! The flight category is computed from the raw record independently of the
//! decoded report, and derived metrics are computed on demand from the report.
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::MetarDecoder;
//!
//! let json = r#"[{"icaoId": "KJFK", "rawOb": "KJFK 121851Z 18010KT 10SM FEW250 15/05 A2992",
//!                 "wdir": 180, "wspd": 10, "visib": "10+", "temp": 15, "dewp": 5,
//!                 "altim": 1013.2, "elev": 4, "clouds": [{"cover": "FEW", "base": 25000}]}]"#;
//!
//! let decoder = MetarDecoder::default();
//! let reports = decoder.analyze_response(json)?;
//! assert_eq!(reports[0].flight_category.label(), "VFR");
//! # Ok::<(), metar_decoder::DecodeError>(())
//! ```

pub mod altimeter;
pub mod extractor;

#[cfg(test)]
pub mod tests;

pub use altimeter::{AltimeterCheck, AltimeterReconciler};
pub use extractor::ClassificationInput;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::{DerivedMetrics, FlightCategory};
use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::models::{Altimeter, DecodedReport, RawObservation};

/// Full output for one station: decoded fields, flight category and derived metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub report: DecodedReport,
    pub flight_category: FlightCategory,
    pub altimeter_check: AltimeterCheck,
    pub metrics: DerivedMetrics,
}

/// Decodes observation records
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MetarDecoder {
    reconciler: AltimeterReconciler,
}

impl MetarDecoder {
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            reconciler: AltimeterReconciler::new(config.altimeter_tolerance_inhg),
        }
    }

    /// Decode one observation record
    ///
    /// Fails only when the record has no METAR text; every other missing
    /// field becomes an absent reading in the report.
    pub fn decode(&self, observation: &RawObservation) -> Result<DecodedReport> {
        self.decode_with_check(observation).map(|(report, _)| report)
    }

    /// Classify the flight category straight from the raw record
    pub fn classify(&self, observation: &RawObservation) -> FlightCategory {
        let input = ClassificationInput::from_observation(observation);
        let category = FlightCategory::from_input(&input);
        debug!(
            "Classified {} from ceiling {:?} ft, visibility {:?} SM",
            category, input.ceiling_ft, input.visibility_sm
        );
        category
    }

    /// Decode, classify and compute derived metrics for one record
    pub fn analyze(&self, observation: &RawObservation) -> Result<StationReport> {
        let (report, altimeter_check) = self.decode_with_check(observation)?;
        let flight_category = self.classify(observation);
        let metrics = DerivedMetrics::from_report(&report);

        Ok(StationReport {
            report,
            flight_category,
            altimeter_check,
            metrics,
        })
    }

    /// Parse and analyze a full upstream response
    ///
    /// A station that fails to decode is logged and left out; the others are
    /// still reported.
    pub fn analyze_response(&self, json: &str) -> Result<Vec<StationReport>> {
        let observations = parse_response(json)?;
        let reports: Vec<StationReport> = observations
            .iter()
            .filter_map(|observation| match self.analyze(observation) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!(
                        "Skipping station {}: {}",
                        observation.icao_id.as_deref().unwrap_or("(unknown)"),
                        e
                    );
                    None
                }
            })
            .collect();

        if reports.is_empty() {
            return Err(DecodeError::NoObservations);
        }

        info!("Decoded {} station report(s)", reports.len());
        Ok(reports)
    }

    fn decode_with_check(
        &self,
        observation: &RawObservation,
    ) -> Result<(DecodedReport, AltimeterCheck)> {
        let raw_text = observation
            .raw_text()
            .ok_or_else(|| DecodeError::malformed("observation has no rawOb text"))?;

        let altimeter_check = self.reconciler.reconcile(raw_text, observation.altim);

        let report = DecodedReport {
            station: non_blank(observation.icao_id.as_deref()),
            name: non_blank(observation.name.as_deref()),
            raw_text: raw_text.to_string(),
            elevation_ft: extractor::extract_elevation_ft(observation.elev),
            time: extractor::extract_time(raw_text),
            wind: extractor::extract_wind(observation.wdir, observation.wspd, observation.wgst),
            visibility: extractor::extract_visibility(observation.visib.as_ref()),
            ceiling: extractor::extract_ceiling(&observation.clouds),
            temperature: extractor::extract_temperature(observation.temp),
            dewpoint: extractor::extract_temperature(observation.dewp),
            altimeter: Altimeter {
                hpa: observation.altim.filter(|v| v.is_finite()),
                inhg: altimeter_check.inhg(),
            },
        };

        debug!(
            "Decoded {}: time {:?}, wind {:?}, ceiling {:?}, altimeter {:?}",
            report.station.as_deref().unwrap_or("unknown station"),
            report.time,
            report.wind,
            report.ceiling,
            altimeter_check
        );

        Ok((report, altimeter_check))
    }
}

/// Parse the upstream JSON response into observation records
///
/// The service answers with an array of station objects. A bare object is
/// accepted as a single-station response, and any other top-level value is
/// malformed. Items that are not objects or carry no `rawOb` text are
/// skipped with a warning so the remaining stations still decode. Fails with
/// [`DecodeError::NoObservations`] when no station is left.
pub fn parse_response(json: &str) -> Result<Vec<RawObservation>> {
    let value: Value = serde_json::from_str(json)?;

    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(DecodeError::malformed(format!(
                "expected an array of observations, found {}",
                json_kind(&other)
            )));
        }
    };

    let total = items.len();
    let observations: Vec<RawObservation> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match parse_observation(index, item) {
            Ok(observation) => Some(observation),
            Err(e) => {
                warn!("Skipping station: {}", e);
                None
            }
        })
        .collect();

    if observations.is_empty() {
        return Err(DecodeError::NoObservations);
    }
    if observations.len() < total {
        info!(
            "Parsed {} of {} observation(s)",
            observations.len(),
            total
        );
    }

    Ok(observations)
}

fn parse_observation(index: usize, item: Value) -> Result<RawObservation> {
    let Value::Object(fields) = &item else {
        return Err(DecodeError::malformed(format!(
            "observation {} is {}, not an object",
            index,
            json_kind(&item)
        )));
    };

    let has_text = fields
        .get("rawOb")
        .and_then(Value::as_str)
        .is_some_and(|raw| !raw.trim().is_empty());
    if !has_text {
        return Err(DecodeError::malformed(format!(
            "observation {} has no rawOb text",
            index
        )));
    }

    Ok(serde_json::from_value(item)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
