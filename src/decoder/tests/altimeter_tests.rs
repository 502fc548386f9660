//! Tests for altimeter reconciliation

use super::*;
use crate::decoder::altimeter::{
    AltimeterCheck, AltimeterReconciler, extract_altimeter_group,
};

#[test]
fn test_group_extraction() {
    let inhg = extract_altimeter_group(KJFK_RAW).unwrap();
    assert!((inhg - 29.92).abs() < 1e-9);

    let inhg = extract_altimeter_group("KDEN 121853Z 25012KT 10SM FEW120 32/M02 A3012").unwrap();
    assert!((inhg - 30.12).abs() < 1e-9);
}

#[test]
fn test_group_missing() {
    assert_eq!(extract_altimeter_group("EGLL 121850Z 24008KT 9999 Q1013"), None);
    assert_eq!(extract_altimeter_group("KJFK 121851Z A299"), None);
    assert_eq!(extract_altimeter_group(""), None);
}

#[test]
fn test_group_starts_a_token() {
    // Only the first four digits are read
    assert_eq!(extract_altimeter_group("KXYZ 121851Z A29921"), Some(29.92));
    // An A inside another token does not start a group
    assert_eq!(extract_altimeter_group("KXYZ 121851Z SLPA2992"), None);
    // Remarks such as AO2 are not mistaken for the group
    assert_eq!(
        extract_altimeter_group("KJFK 121851Z 18010KT A2992 RMK AO2 SLP132"),
        Some(29.92)
    );
}

#[test]
fn test_agreeing_readings_accepted() {
    let reconciler = AltimeterReconciler::default();

    let check = reconciler.reconcile(KJFK_RAW, Some(1013.0));
    assert!(check.is_accepted());
    assert!((check.inhg().unwrap() - 29.92).abs() < 1e-9);

    let check = reconciler.reconcile(KJFK_RAW, Some(1013.2));
    assert_eq!(check, AltimeterCheck::Accepted { inhg: 29.92 });
}

#[test]
fn test_disagreement_is_unavailable() {
    let reconciler = AltimeterReconciler::default();
    let check = reconciler.reconcile(KJFK_RAW, Some(950.0));

    match check {
        AltimeterCheck::Disagreement {
            coded_inhg,
            reported_inhg,
        } => {
            assert!((coded_inhg - 29.92).abs() < 1e-9);
            assert!((reported_inhg - 28.0535).abs() < 1e-6);
        }
        other => panic!("Expected disagreement, got {:?}", other),
    }
    assert_eq!(check.inhg(), None);
}

#[test]
fn test_no_fallback_to_reported_value_just_outside_tolerance() {
    // 1015 hPa is 29.97 inHg, 0.054 above the coded 29.92
    let check = AltimeterReconciler::default().reconcile(KJFK_RAW, Some(1015.0));
    assert!(matches!(check, AltimeterCheck::Disagreement { .. }));
    assert_eq!(check.inhg(), None);
}

#[test]
fn test_missing_group_is_unavailable_regardless_of_reading() {
    let reconciler = AltimeterReconciler::default();
    let raw = "KJFK 121851Z 18010KT 10SM BKN025 15/05";

    assert_eq!(
        reconciler.reconcile(raw, Some(1013.2)),
        AltimeterCheck::MissingGroup
    );
    assert_eq!(reconciler.reconcile(raw, None), AltimeterCheck::MissingGroup);
}

#[test]
fn test_missing_reading_is_unavailable() {
    let check = AltimeterReconciler::default().reconcile(KJFK_RAW, None);
    assert!(matches!(check, AltimeterCheck::MissingReading { .. }));
    assert_eq!(check.inhg(), None);

    let check = AltimeterReconciler::default().reconcile(KJFK_RAW, Some(f64::NAN));
    assert!(matches!(check, AltimeterCheck::MissingReading { .. }));
}

#[test]
fn test_custom_tolerance() {
    let strict = AltimeterReconciler::new(0.001);
    assert_eq!(strict.tolerance_inhg(), 0.001);
    // 1013.0 hPa is 29.914 inHg, 0.006 from the coded value
    assert!(!strict.reconcile(KJFK_RAW, Some(1013.0)).is_accepted());

    let loose = AltimeterReconciler::new(0.2);
    assert!(loose.reconcile(KJFK_RAW, Some(1018.0)).is_accepted());
}
