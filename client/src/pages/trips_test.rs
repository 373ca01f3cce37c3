use super::*;
use wire::models::TripStatus;

fn trip(json: serde_json::Value) -> Trip {
    serde_json::from_value(json).expect("trip")
}

#[test]
fn trip_type_is_title_cased() {
    let t = trip(serde_json::json!({ "_id": "t1", "tripType": "pickup", "status": "scheduled" }));
    assert_eq!(trip_type(&t), Cell::text("Pickup"));
}

#[test]
fn missing_trip_type_is_empty() {
    let t = trip(serde_json::json!({ "_id": "t1", "tripType": "  ", "status": "completed" }));
    assert_eq!(trip_type(&t), Cell::Empty);
    let t = trip(serde_json::json!({ "_id": "t2", "status": "completed" }));
    assert_eq!(trip_type(&t), Cell::Empty);
}

#[test]
fn only_open_trips_offer_cancel() {
    let scheduled = trip(serde_json::json!({ "_id": "t1", "status": "scheduled" }));
    let done = trip(serde_json::json!({ "_id": "t2", "status": "completed" }));
    assert!(scheduled.status.is_cancellable());
    assert_eq!(done.status, TripStatus::Completed);
    assert!(!done.status.is_cancellable());
}
