//! Reading payload decoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};

use sensorgate_core::{Measurement, Reading, ReadingPayload, SensorGateError};

#[test]
fn decode_full_payload() {
    let body = br#"{"measurement":"temperature","host":"dht22-salon","value":"21.4","typeValue":"C"}"#;
    let p = ReadingPayload::decode(body).unwrap();
    assert_eq!(p.measurement, Measurement::Temperature);
    assert_eq!(p.host, "dht22-salon");
    assert_eq!(p.type_value, "C");
    assert_eq!(p.parse_value().unwrap(), 21.4);
}

#[test]
fn decode_minimal_payload_defaults_missing_fields() {
    let p = ReadingPayload::decode(br#"{"value":"1"}"#).unwrap();
    assert_eq!(p.measurement, Measurement::Unknown(String::new()));
    assert!(p.host.is_empty());
    assert!(p.type_value.is_empty());
}

#[test]
fn decode_ignores_unknown_fields_and_client_timestamp() {
    let body = br#"{"measurement":"humidity","value":"55.5","createdAt":"2001-01-01T00:00:00Z","battery":3}"#;
    let p = ReadingPayload::decode(body).unwrap();
    assert_eq!(p.measurement, Measurement::Humidity);
}

#[test]
fn real_feel_maps_to_feels_like() {
    let p = ReadingPayload::decode(br#"{"measurement":"realFeel","value":"19"}"#).unwrap();
    assert_eq!(p.measurement, Measurement::FeelsLike);
}

#[test]
fn measurement_match_is_case_sensitive() {
    assert_eq!(
        Measurement::from_name("Temperature"),
        Measurement::Unknown("Temperature".into())
    );
    assert!(matches!(
        Measurement::from_name("pressure"),
        Measurement::Unknown(_)
    ));
}

#[test]
fn malformed_json_is_bad_request() {
    let err = ReadingPayload::decode(b"{not json").unwrap_err();
    assert!(matches!(err, SensorGateError::BadRequest(_)));
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_value_is_bad_request() {
    let err = ReadingPayload::decode(br#"{"measurement":"temperature"}"#).unwrap_err();
    assert!(matches!(err, SensorGateError::BadRequest(_)));
}

#[test]
fn numeric_json_value_is_rejected() {
    // value travels as text on the wire
    let err = ReadingPayload::decode(br#"{"measurement":"temperature","value":21.4}"#).unwrap_err();
    assert!(matches!(err, SensorGateError::BadRequest(_)));
}

#[test]
fn non_numeric_value_fails_to_parse() {
    let p = ReadingPayload::decode(br#"{"measurement":"temperature","value":"abc"}"#).unwrap();
    let err = p.parse_value().unwrap_err();
    match &err {
        SensorGateError::InvalidValue { value, .. } => assert_eq!(value, "abc"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.client_code().http_status(), 400);
}

#[test]
fn reading_serializes_with_wire_names() {
    let p = ReadingPayload::decode(br#"{"measurement":"realFeel","host":"h","value":"3.5","typeValue":"C"}"#)
        .unwrap();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let reading = p.into_reading(at);

    let v = serde_json::to_value(&reading).unwrap();
    assert_eq!(v["measurement"], "realFeel");
    assert_eq!(v["typeValue"], "C");
    assert_eq!(v["createdAt"], "2024-05-01T12:00:00Z");

    let back: Reading = serde_json::from_value(v).unwrap();
    assert_eq!(back, reading);
}

#[test]
fn unknown_measurement_keeps_its_name() {
    let p = ReadingPayload::decode(br#"{"measurement":"pressure","value":"1013"}"#).unwrap();
    let reading = p.into_reading(Utc::now());
    let v = serde_json::to_value(&reading).unwrap();
    assert_eq!(v["measurement"], "pressure");
}

fn parse(value: &str) -> sensorgate_core::Result<f64> {
    let body = format!(r#"{{"measurement":"temperature","value":"{value}"}}"#);
    ReadingPayload::decode(body.as_bytes()).unwrap().parse_value()
}

#[test]
fn overflowing_literal_is_rejected() {
    for v in ["1e400", "-1e400", "1.8e308"] {
        match parse(v) {
            Err(SensorGateError::InvalidValue { value, reason }) => {
                assert_eq!(value, v);
                assert_eq!(reason, "value out of range");
            }
            other => panic!("{v}: unexpected {other:?}"),
        }
    }
}

#[test]
fn spelled_out_non_finite_values_are_accepted() {
    assert_eq!(parse("inf").unwrap(), f64::INFINITY);
    assert_eq!(parse("+Infinity").unwrap(), f64::INFINITY);
    assert_eq!(parse("-inf").unwrap(), f64::NEG_INFINITY);
    assert!(parse("NaN").unwrap().is_nan());
    assert_eq!(parse("1.7e308").unwrap(), 1.7e308);
}

#[test]
fn error_messages_are_plain() {
    assert_eq!(
        SensorGateError::MethodNotAllowed.to_string(),
        "Only POST method is supported"
    );
    assert_eq!(
        SensorGateError::BadRequest("Invalid JSON".into()).to_string(),
        "Invalid JSON"
    );
    assert_eq!(SensorGateError::UpstreamTimeout.client_code().http_status(), 504);
}

#[test]
fn decoding_is_strict_about_trailing_bytes_and_field_case() {
    let err = ReadingPayload::decode(br#"{"value":"1"} {"value":"2"}"#).unwrap_err();
    assert!(matches!(err, SensorGateError::BadRequest(_)));

    let p = ReadingPayload::decode(br#"{"Measurement":"temperature","value":"1"}"#).unwrap();
    assert_eq!(p.measurement, Measurement::Unknown(String::new()));
}
