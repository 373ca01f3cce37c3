use super::*;
use serde_json::json;

#[test]
fn to_paise_rounds_to_nearest_paisa() {
    assert_eq!(to_paise(1500.0), Some(150_000));
    assert_eq!(to_paise(19.99), Some(1999));
    assert_eq!(to_paise(0.0), Some(0));
}

#[test]
fn to_paise_rejects_negative_and_nan() {
    assert_eq!(to_paise(-1.0), None);
    assert_eq!(to_paise(f64::NAN), None);
    assert_eq!(to_paise(f64::INFINITY), None);
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(1500.0, "INR"), "₹1,500.00");
    assert_eq!(format_amount(1_234_567.5, "USD"), "$1,234,567.50");
    assert_eq!(format_amount(12.0, "INR"), "₹12.00");
}

#[test]
fn rupees_use_lakh_and_crore_grouping() {
    assert_eq!(format_amount(100_000.0, "INR"), "₹1,00,000.00");
    assert_eq!(format_amount(12_345_678.9, "INR"), "₹1,23,45,678.90");
    assert_eq!(format_amount(100_000.0, "USD"), "$100,000.00");
    assert_eq!(format_amount(999.0, "INR"), "₹999.00");
}

#[test]
fn format_amount_keeps_sign_and_unknown_currency() {
    assert_eq!(format_amount(-250.0, "INR"), "-₹250.00");
    assert_eq!(format_amount(9.5, "EUR"), "EUR 9.50");
}

#[test]
fn refund_request_omits_optional_fields() {
    let body = RefundRequest { payment_id: "pay_1".to_owned(), amount: None, reason: None };
    assert_eq!(serde_json::to_value(&body).expect("serialize"), json!({ "paymentId": "pay_1" }));
}

#[test]
fn verify_payment_uses_gateway_field_names() {
    let body = VerifyPayment {
        razorpay_order_id: "order_1".to_owned(),
        razorpay_payment_id: "pay_1".to_owned(),
        razorpay_signature: "sig".to_owned(),
    };
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(value["razorpay_order_id"], "order_1");
    assert_eq!(value["razorpay_signature"], "sig");
}
