use super::*;
use serde_json::json;

#[test]
fn missing_or_empty_details_are_blank() {
    assert_eq!(details_summary(None), Cell::Empty);
    assert_eq!(details_summary(Some(&Value::Null)), Cell::Empty);
    assert_eq!(details_summary(Some(&json!({}))), Cell::Empty);
    assert_eq!(details_summary(Some(&json!(""))), Cell::Empty);
}

#[test]
fn object_details_become_pairs() {
    let details = json!({ "from": "pending", "seats": 40, "to": "approved" });
    assert_eq!(details_summary(Some(&details)), Cell::text("from=pending, seats=40, to=approved"));
}

#[test]
fn long_details_are_cut() {
    let details = json!("x".repeat(200));
    let Cell::Text(line) = details_summary(Some(&details)) else {
        panic!("expected text cell");
    };
    assert_eq!(line.chars().count(), DETAILS_LIMIT + 1);
    assert!(line.ends_with('…'));
}

#[test]
fn target_includes_record_id() {
    let log: AuditLog = serde_json::from_value(json!({
        "_id": "a1",
        "action": "update",
        "resource": "driver",
        "resourceId": "d7"
    }))
    .expect("audit log");
    assert_eq!(target(&log), Cell::text("driver d7"));
}
