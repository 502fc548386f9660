//! Tests for the decoding pipeline
//!
//! Unit tests for each extractor, the altimeter reconciler, upstream record
//! deserialization and the end-to-end decoder.

pub mod altimeter_tests;

use crate::models::{CloudCover, CloudLayer, RawObservation, VisibilityField, WindDirection};

/// Raw text of the reference KJFK observation
pub const KJFK_RAW: &str = "KJFK 121851Z 18010G18KT 10SM BKN025 15/05 A2992";

/// Reference KJFK record as the service delivers it
pub const KJFK_JSON: &str = r#"{
    "icaoId": "KJFK",
    "name": "New York/JF Kennedy Intl, NY, US",
    "rawOb": "KJFK 121851Z 18010G18KT 10SM BKN025 15/05 A2992",
    "elev": 10,
    "wdir": 180,
    "wspd": 10,
    "wgst": 18,
    "visib": "10",
    "temp": 15,
    "dewp": 5,
    "altim": 1013.2,
    "clouds": [{"cover": "BKN", "base": 2500}]
}"#;

/// Reference KJFK record built directly
pub fn kjfk_observation() -> RawObservation {
    RawObservation {
        raw_ob: Some(KJFK_RAW.to_string()),
        name: Some("New York/JF Kennedy Intl, NY, US".to_string()),
        icao_id: Some("KJFK".to_string()),
        elev: Some(10.0),
        wdir: Some(WindDirection::Degrees(180.0)),
        wspd: Some(10.0),
        wgst: Some(18.0),
        visib: Some(VisibilityField::Text("10".to_string())),
        temp: Some(15.0),
        dewp: Some(5.0),
        altim: Some(1013.2),
        clouds: vec![CloudLayer::new(CloudCover::Bkn, Some(2500.0))],
    }
}

/// A record with only the raw text set
pub fn bare_observation(raw: &str) -> RawObservation {
    RawObservation {
        raw_ob: Some(raw.to_string()),
        ..Default::default()
    }
}
