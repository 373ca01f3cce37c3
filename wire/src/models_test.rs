use super::*;
use serde_json::json;

#[test]
fn driver_accepts_mongo_style_id_and_defaults() {
    let driver: Driver = serde_json::from_value(json!({
        "_id": "d-1",
        "name": "Ravi",
        "phone": "9876543210"
    }))
    .expect("driver");
    assert_eq!(driver.id(), "d-1");
    assert_eq!(driver.verification_status, VerificationStatus::Pending);
    assert!(driver.is_active);
    assert!(driver.vehicle_number.is_none());
}

#[test]
fn trip_status_parses_snake_case_and_tolerates_unknown() {
    let trip: Trip = serde_json::from_value(json!({ "id": "t-1", "status": "in_progress" })).expect("trip");
    assert_eq!(trip.status, TripStatus::InProgress);
    let trip: Trip = serde_json::from_value(json!({ "id": "t-2", "status": "teleported" })).expect("trip");
    assert_eq!(trip.status, TripStatus::Unknown);
}

#[test]
fn trip_cancellable_only_before_completion() {
    assert!(TripStatus::Scheduled.is_cancellable());
    assert!(TripStatus::InProgress.is_cancellable());
    assert!(!TripStatus::Completed.is_cancellable());
    assert!(!TripStatus::Cancelled.is_cancellable());
}

#[test]
fn assignment_status_review_states() {
    assert!(AssignmentStatus::Pending.awaits_review());
    assert!(AssignmentStatus::ParentRequested.awaits_review());
    assert!(!AssignmentStatus::Active.awaits_review());
    assert!(!AssignmentStatus::Rejected.awaits_review());
    let parsed: AssignmentStatus = serde_json::from_value(json!("parent_requested")).expect("status");
    assert_eq!(parsed, AssignmentStatus::ParentRequested);
}

#[test]
fn assignment_target_name_follows_kind() {
    let assignment: Assignment = serde_json::from_value(json!({
        "id": "a-1",
        "kind": "driver_school",
        "driverId": "d-1",
        "studentName": "Asha",
        "schoolName": "Hill View"
    }))
    .expect("assignment");
    assert_eq!(assignment.target_name(), Some("Hill View"));
}

#[test]
fn assignment_target_name_falls_back_to_id() {
    let assignment: Assignment = serde_json::from_value(json!({
        "id": "a-2",
        "driverId": "d-1",
        "studentId": "s-9"
    }))
    .expect("assignment");
    assert_eq!(assignment.kind, AssignmentKind::DriverStudent);
    assert_eq!(assignment.target_name(), Some("s-9"));
}

#[test]
fn payment_refundable_requires_completed_gateway_payment() {
    let mut payment: Payment = serde_json::from_value(json!({
        "id": "p-1",
        "amount": 1500.0,
        "status": "completed",
        "razorpayPaymentId": "pay_123"
    }))
    .expect("payment");
    assert_eq!(payment.currency, "INR");
    assert!(payment.is_refundable());
    payment.status = PaymentStatus::Refunded;
    assert!(!payment.is_refundable());
    payment.status = PaymentStatus::Completed;
    payment.razorpay_payment_id = None;
    assert!(!payment.is_refundable());
}

#[test]
fn admin_draft_omits_password_when_unset() {
    let draft = AdminDraft {
        name: "Meera".to_owned(),
        email: "meera@example.com".to_owned(),
        phone: None,
        role: Role::Support,
        password: None,
    };
    let value = serde_json::to_value(&draft).expect("serialize");
    assert_eq!(value, json!({ "name": "Meera", "email": "meera@example.com", "role": "support" }));
}

#[test]
fn dashboard_stats_defaults_missing_counters() {
    let stats: DashboardStats = serde_json::from_value(json!({ "totalDrivers": 4 })).expect("stats");
    assert_eq!(stats.total_drivers, 4);
    assert_eq!(stats.pending_assignments, 0);
}

#[test]
fn audit_log_keeps_arbitrary_details() {
    let log: AuditLog = serde_json::from_value(json!({
        "id": "l-1",
        "action": "update",
        "resource": "driver",
        "details": { "field": "phone" }
    }))
    .expect("audit log");
    assert_eq!(log.details, Some(json!({ "field": "phone" })));
}

#[test]
fn records_with_both_id_keys_decode() {
    let school: School = serde_json::from_value(json!({
        "_id": "s1",
        "id": "s1",
        "name": "Green Valley",
        "address": "MG Road"
    }))
    .expect("school");
    assert_eq!(school.id(), "s1");
    assert_eq!(school.name, "Green Valley");
}

#[test]
fn plain_id_still_decodes() {
    let school: School =
        serde_json::from_value(json!({ "id": "s2", "name": "Hillside", "address": "Ring Road" })).expect("school");
    assert_eq!(school.id(), "s2");
}

#[test]
fn one_mixed_row_does_not_fail_the_list() {
    let rows = crate::envelope::decode_list::<School>(Some(json!([
        { "_id": "s1", "name": "A", "address": "B" },
        { "_id": "s2", "id": "s2", "name": "C", "address": "D" }
    ])))
    .expect("schools");
    assert_eq!(rows.iter().map(Entity::id).collect::<Vec<_>>(), ["s1", "s2"]);
}

#[test]
fn entities_serialize_with_camel_case_keys() {
    let school: School =
        serde_json::from_value(json!({ "_id": "s1", "name": "A", "address": "B" })).expect("school");
    let value = serde_json::to_value(&school).expect("serialize");
    assert_eq!(value["id"], "s1");
    assert_eq!(value["name"], "A");
}
