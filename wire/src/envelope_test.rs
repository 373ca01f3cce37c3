use super::*;
use serde_json::json;

#[test]
fn from_response_accepts_successful_envelope() {
    let body = r#"{"success":true,"data":[{"id":"a"}],"message":"ok"}"#;
    let envelope = Envelope::from_response(200, body).expect("envelope");
    assert!(envelope.success);
    assert_eq!(envelope.data, Some(json!([{ "id": "a" }])));
    assert_eq!(envelope.message.as_deref(), Some("ok"));
}

#[test]
fn from_response_surfaces_error_field_on_failure() {
    let body = r#"{"success":false,"error":"Email already in use"}"#;
    let err = Envelope::from_response(409, body).expect_err("should fail");
    assert_eq!(err, ApiError::Api { status: 409, message: "Email already in use".to_owned() });
}

#[test]
fn from_response_treats_success_false_with_200_as_api_error() {
    let body = r#"{"success":false,"message":"Plan is inactive"}"#;
    let err = Envelope::from_response(200, body).expect_err("should fail");
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.to_string(), "Plan is inactive");
}

#[test]
fn from_response_falls_back_to_status_text_for_non_json_errors() {
    let err = Envelope::from_response(502, "<html>Bad Gateway</html>").expect_err("should fail");
    assert_eq!(err, ApiError::Api { status: 502, message: "request failed: 502".to_owned() });
}

#[test]
fn from_response_maps_unauthorized_status() {
    let err = Envelope::from_response(401, "").expect_err("should fail");
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "session expired, sign in again");
}

#[test]
fn from_response_rejects_non_envelope_success_body() {
    let err = Envelope::from_response(200, "[1,2,3]").expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn failure_message_skips_blank_error() {
    let envelope: Envelope = Envelope {
        success: false,
        data: None,
        message: Some("Trip already completed".to_owned()),
        error: Some("   ".to_owned()),
    };
    assert_eq!(envelope.failure_message(400), "Trip already completed");
}

#[test]
fn decode_list_treats_missing_data_as_empty() {
    let rows: Vec<serde_json::Value> = decode_list(None).expect("list");
    assert!(rows.is_empty());
    let rows: Vec<serde_json::Value> = decode_list(Some(serde_json::Value::Null)).expect("list");
    assert!(rows.is_empty());
}

#[test]
fn decode_list_parses_empty_array() {
    let rows: Vec<String> = decode_list(Some(json!([]))).expect("list");
    assert!(rows.is_empty());
}

#[test]
fn decode_list_rejects_object_payload() {
    let err = decode_list::<String>(Some(json!({ "items": [] }))).expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_data_requires_payload() {
    let err = decode_data::<String>(None).expect_err("should fail");
    assert_eq!(err, ApiError::Decode("response carried no data".to_owned()));
}

#[test]
fn failure_envelope_serializes_without_data() {
    let envelope: Envelope = Envelope::failure("upstream unreachable");
    let value = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(value, json!({ "success": false, "error": "upstream unreachable" }));
}
