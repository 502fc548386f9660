//! Integration tests for decoding METAR API responses end to end
//!
//! These tests drive the public API the way the CLI does: read a response
//! file, build the configuration from arguments, decode every station and
//! render the display text.

use clap::Parser;
use metar_decoder::cli::args::{Args, Commands, DecodeArgs};
use metar_decoder::{
    AltimeterCheck, DecodeError, FlightCategory, MetarDecoder, RenderedReport, StationReport,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Two stations: the KJFK reference report and a hot, high Denver report
const RESPONSE: &str = r#"[
    {
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
    },
    {
        "icaoId": "KDEN",
        "name": "Denver Intl, CO, US",
        "rawOb": "KDEN 122053Z VRB04KT 10SM FEW100 32/M02 A3012",
        "elev": 1655,
        "wdir": "VRB",
        "wspd": 4,
        "wgst": null,
        "visib": "10+",
        "temp": 32,
        "dewp": -2,
        "altim": 1020,
        "clouds": [{"cover": "FEW", "base": 10000}]
    }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn decode_args(args: &[&str]) -> DecodeArgs {
    match Args::try_parse_from(args).unwrap().command {
        Some(Commands::Decode(decode)) => decode,
        other => panic!("Expected decode command, got {:?}", other),
    }
}

/// Decode and render a file the same way the decode command does
fn decode_file(args: &DecodeArgs) -> metar_decoder::Result<Vec<(StationReport, RenderedReport)>> {
    let config = args.build_config()?;
    let input = args.read_input()?;
    let reports = MetarDecoder::new(&config).analyze_response(&input)?;

    Ok(reports
        .into_iter()
        .map(|report| {
            let rendered =
                RenderedReport::new(&report, config.temperature_unit, config.pressure_unit);
            (report, rendered)
        })
        .collect())
}

#[test]
fn test_decode_response_file() {
    let file = write_temp(RESPONSE);
    let path = file.path().to_str().unwrap();
    let args = decode_args(&["metar-decoder", "decode", path]);

    let decoded = decode_file(&args).unwrap();
    assert_eq!(decoded.len(), 2);

    let (kjfk, rendered) = &decoded[0];
    assert_eq!(kjfk.flight_category, FlightCategory::Mvfr);
    assert_eq!(rendered.station, "KJFK");
    assert_eq!(rendered.time, "18:51 UTC");
    assert_eq!(rendered.wind, "180° at 10 knots, gusting to 18 knots");
    assert_eq!(rendered.visibility, "10 statute miles");
    assert_eq!(rendered.ceiling, "2500 feet");
    assert_eq!(rendered.elevation, "33 feet");
    assert_eq!(rendered.temperature.primary, "15.0°C");
    assert_eq!(rendered.temperature.alternate, "59.0°F");
    assert_eq!(rendered.altimeter.primary, "29.92 inHg");
    assert_eq!(rendered.altimeter.alternate, "1013.2 hPa");
    assert_eq!(rendered.flight_category, "MVFR");
    assert_eq!(rendered.metrics.pressure_altitude, "33 feet");
    assert_eq!(rendered.metrics.density_altitude, "41 feet");
    assert_eq!(rendered.metrics.relative_humidity, "75%");
    assert_eq!(rendered.metrics.air_density, "1.225 kg/m³");

    let (kden, rendered) = &decoded[1];
    assert_eq!(kden.flight_category, FlightCategory::Vfr);
    assert_eq!(rendered.wind, "Variable at 4 knots");
    assert_eq!(rendered.ceiling, "None");
    assert_eq!(rendered.temperature.primary, "32.0°C");
    assert_eq!(rendered.dewpoint.primary, "-2.0°C");
    assert_eq!(rendered.altimeter.primary, "30.12 inHg");
    assert_eq!(rendered.metrics.pressure_altitude, "5,230 feet");
    assert_eq!(rendered.metrics.density_altitude, "8,525 feet");
    assert_eq!(rendered.metrics.relative_humidity, "38%");
    assert_eq!(rendered.metrics.air_density, "1.164 kg/m³");
}

#[test]
fn test_unit_preferences_from_config_file() {
    let response = write_temp(RESPONSE);
    let config = write_temp(r#"{"temperature_unit": "fahrenheit", "pressure_unit": "hpa"}"#);
    let args = decode_args(&[
        "metar-decoder",
        "decode",
        response.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]);

    let decoded = decode_file(&args).unwrap();
    let (_, rendered) = &decoded[0];
    assert_eq!(rendered.temperature.primary, "59.0°F");
    assert_eq!(rendered.temperature.alternate, "15.0°C");
    assert_eq!(rendered.altimeter.primary, "1013.2 hPa");
    assert_eq!(rendered.altimeter.alternate, "29.92 inHg");
}

#[test]
fn test_cli_overrides_config_file() {
    let response = write_temp(RESPONSE);
    let config = write_temp(r#"{"temperature_unit": "fahrenheit"}"#);
    let args = decode_args(&[
        "metar-decoder",
        "decode",
        response.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
        "--temp-unit",
        "c",
    ]);

    let decoded = decode_file(&args).unwrap();
    assert_eq!(decoded[0].1.temperature.primary, "15.0°C");
}

#[test]
fn test_missing_altimeter_renders_sentinels() {
    let response = write_temp(
        r#"[{
            "icaoId": "KXYZ",
            "rawOb": "KXYZ 121851Z 27005KT 3SM OVC008 10/09",
            "elev": 100,
            "wdir": 270,
            "wspd": 5,
            "visib": 3,
            "temp": 10,
            "dewp": 9,
            "clouds": [{"cover": "OVC", "base": 800}]
        }]"#,
    );
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    let decoded = decode_file(&args).unwrap();
    let (station, rendered) = &decoded[0];

    assert_eq!(station.altimeter_check, AltimeterCheck::MissingGroup);
    assert_eq!(station.flight_category, FlightCategory::Ifr);
    assert_eq!(rendered.name, "Unknown");
    assert_eq!(rendered.altimeter.primary, "--- inHg");
    assert_eq!(rendered.altimeter.alternate, "--- hPa");
    assert_eq!(rendered.metrics.pressure_altitude, "unavailable");
    assert_eq!(rendered.metrics.density_altitude, "unavailable");
    assert_eq!(rendered.metrics.relative_humidity, "Not available");
    assert_eq!(rendered.metrics.air_density, "Not available");
}

#[test]
fn test_rendered_json_shape() {
    let response = write_temp(RESPONSE);
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    let decoded = decode_file(&args).unwrap();
    let rendered: Vec<&RenderedReport> = decoded.iter().map(|(_, r)| r).collect();
    let json = serde_json::to_value(&rendered).unwrap();

    assert_eq!(json[0]["station"], "KJFK");
    assert_eq!(json[0]["flight_category"], "MVFR");
    assert_eq!(json[0]["temperature"]["primary"], "15.0°C");
    assert_eq!(json[1]["metrics"]["pressure_altitude"], "5,230 feet");
}

#[test]
fn test_empty_response() {
    let response = write_temp("[]");
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    assert!(matches!(decode_file(&args), Err(DecodeError::NoObservations)));
}

#[test]
fn test_malformed_response() {
    let response = write_temp(r#""station not found""#);
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    let error = decode_file(&args).unwrap_err();
    assert!(matches!(error, DecodeError::MalformedInput { .. }));
    assert!(error.is_input_error());
}

#[test]
fn test_error_object_has_no_observations() {
    let response = write_temp(r#"{"error": "station not found"}"#);
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    assert!(matches!(decode_file(&args), Err(DecodeError::NoObservations)));
}

#[test]
fn test_bad_station_does_not_drop_the_others() {
    let response = write_temp(
        r#"[
            {
                "icaoId": "KJFK",
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
            },
            {"icaoId": "KBAD", "rawOb": "   "},
            "not a station"
        ]"#,
    );
    let args = decode_args(&["metar-decoder", "decode", response.path().to_str().unwrap()]);

    let decoded = decode_file(&args).unwrap();
    assert_eq!(decoded.len(), 1);

    let (station, rendered) = &decoded[0];
    assert_eq!(station.flight_category, FlightCategory::Mvfr);
    assert_eq!(rendered.station, "KJFK");
    assert_eq!(rendered.altimeter.primary, "29.92 inHg");
    assert_eq!(rendered.metrics.pressure_altitude, "33 feet");
}
