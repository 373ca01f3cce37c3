use super::*;
use crate::util::form::values_from;

fn payment() -> Payment {
    serde_json::from_value(serde_json::json!({
        "_id": "pay1",
        "payerName": "Anita Rao",
        "payerType": "parent",
        "amount": 1499.5,
        "status": "completed",
        "razorpayPaymentId": "pay_29QQoUBi66xm2f"
    }))
    .expect("payment")
}

#[test]
fn blank_amount_refunds_in_full() {
    let request = refund_request(&payment(), &values_from([("amount", String::new())])).expect("request");
    assert_eq!(request.payment_id, "pay1");
    assert_eq!(request.amount, None);
    assert_eq!(request.reason, None);
}

#[test]
fn partial_refund_is_sent_in_paise() {
    let values = values_from([("amount", "250.25".to_owned()), ("reason", "Missed week".to_owned())]);
    let request = refund_request(&payment(), &values).expect("request");
    assert_eq!(request.amount, Some(25_025));
    assert_eq!(request.reason.as_deref(), Some("Missed week"));
}

#[test]
fn refund_cannot_exceed_payment() {
    let values = values_from([("amount", "1500".to_owned())]);
    assert_eq!(refund_request(&payment(), &values), Err("Amount cannot exceed ₹1,499.50".to_owned()));
    let values = values_from([("amount", "0".to_owned())]);
    assert_eq!(refund_request(&payment(), &values), Err("Amount must be greater than zero".to_owned()));
}

#[test]
fn order_amount_is_required_and_positive() {
    let values = values_from([("amount", "99.99".to_owned()), ("receipt", "rcpt_7".to_owned())]);
    let order = order_request(&values).expect("order");
    assert_eq!(order.amount, 9999);
    assert_eq!(order.currency, "INR");
    assert_eq!(order.subscription_id, None);

    let values = values_from([("amount", String::new()), ("receipt", "rcpt_7".to_owned())]);
    assert_eq!(order_request(&values), Err("Amount must be greater than zero".to_owned()));
}

#[test]
fn verify_request_trims_gateway_ids() {
    let values = values_from([
        ("orderId", " order_1 ".to_owned()),
        ("paymentId", "pay_1".to_owned()),
        ("signature", "abc123".to_owned()),
    ]);
    let request = verify_request(&values);
    assert_eq!(request.razorpay_order_id, "order_1");
    assert_eq!(request.razorpay_signature, "abc123");
}

#[test]
fn payer_combines_name_and_type() {
    assert_eq!(payer(&payment()), Cell::text("Anita Rao (parent)"));
    let mut anonymous = payment();
    anonymous.payer_name = None;
    assert_eq!(payer(&anonymous), Cell::Empty);
}

#[test]
fn paise_render_as_rupees() {
    assert_eq!(paise_label(25_025, "INR"), "₹250.25");
}

#[test]
fn refund_notice_uses_payment_currency() {
    let refund = Refund { id: "rfnd_1".to_owned(), amount: 1_000_000, status: None };
    assert_eq!(refund_notice(Some(&refund), "USD"), "Refund rfnd_1 issued for $10,000.00");
    assert_eq!(refund_notice(Some(&refund), "INR"), "Refund rfnd_1 issued for ₹10,000.00");
    assert_eq!(refund_notice(None, "INR"), "Refund requested");
}

#[test]
fn only_settled_payments_refund() {
    let mut p = payment();
    assert!(p.is_refundable());
    p.status = wire::models::PaymentStatus::Refunded;
    assert!(!p.is_refundable());
}
