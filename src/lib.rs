//! METAR Decoder Library
//!
//! Decodes METAR aviation routine weather reports, as delivered by the
//! aviation weather service's JSON API, into structured fields.
//!
//! This library provides tools for:
//! - Extracting wind, visibility, ceiling, time and temperatures from a report
//! - Reconciling the coded altimeter group with the reported hPa value
//! - Deriving pressure altitude, density altitude, relative humidity and air density
//! - Classifying the flight category (VFR, MVFR, IFR, LIFR)
//!
//! Decoding is synchronous and free of I/O; fetching reports is left to the caller.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod models;
pub mod render;
pub mod units;

// Re-export commonly used types
pub use analysis::{DerivedMetrics, FlightCategory};
pub use config::{DecoderConfig, PressureUnit, TemperatureUnit};
pub use decoder::{AltimeterCheck, MetarDecoder, StationReport, parse_response};
pub use error::{DecodeError, Result};
pub use models::{DecodedReport, RawObservation};
pub use render::RenderedReport;
