use super::*;

#[test]
fn login_payload_trims_email() {
    let payload = login_payload("  ops@example.com ", "secret").expect("valid credentials");
    assert_eq!(payload.email, "ops@example.com");
    assert_eq!(payload.password, "secret");
}

#[test]
fn login_payload_rejects_blank_fields() {
    assert!(matches!(login_payload("", "secret"), Err(ApiError::Validation(_))));
    assert!(matches!(login_payload("ops@example.com", ""), Err(ApiError::Validation(_))));
}

#[test]
fn unauthorized_login_gets_friendly_message() {
    let err = ApiError::Api { status: 401, message: "bad credentials".to_owned() };
    assert_eq!(login_rejected_message(&err), "Invalid email or password");
}

#[test]
fn transport_failure_login_message_suggests_retry() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(login_rejected_message(&err), "Could not reach the server, try again");
}

#[test]
fn other_login_errors_use_api_message() {
    let err = ApiError::Api { status: 423, message: "account locked".to_owned() };
    assert_eq!(login_rejected_message(&err), "account locked");
}

fn success(data: serde_json::Value) -> Envelope {
    Envelope { success: true, data: Some(data), message: None, error: None }
}

#[test]
fn refund_record_reads_envelope_data() {
    let envelope = success(serde_json::json!({ "id": "rfnd_1", "amount": 5000, "status": "processed" }));
    let refund = refund_record(&envelope).expect("refund");
    assert_eq!(refund.id, "rfnd_1");
    assert_eq!(refund.amount, 5000);
}

#[test]
fn refund_record_is_none_without_data() {
    let envelope: Envelope = Envelope::failure("gateway down");
    assert_eq!(refund_record(&envelope), None);
}

#[test]
fn order_record_reads_gateway_order() {
    let envelope = success(serde_json::json!({
        "id": "order_9A33XWu170gUtm",
        "amount": 149_950,
        "currency": "INR",
        "receipt": "rcpt_42"
    }));
    let order = order_record(&envelope).expect("order");
    assert_eq!(order.id, "order_9A33XWu170gUtm");
    assert_eq!(order.amount, 149_950);
    assert_eq!(order.status, None);
}
