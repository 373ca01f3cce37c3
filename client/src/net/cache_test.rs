use super::*;
use serde_json::json;

fn cache_with_drivers_and_trips() -> QueryCache {
    let mut cache = QueryCache::default();
    assert!(cache.insert_if_current("/drivers".to_owned(), vec![Tag::Driver], Some(json!([])), 0));
    assert!(cache.insert_if_current("/trips/admin/all-trips".to_owned(), vec![Tag::Trip], Some(json!([])), 0));
    cache
}

#[test]
fn insert_and_get_round_trip_payload() {
    let cache = cache_with_drivers_and_trips();
    let entry = cache.get("/drivers").expect("entry");
    assert_eq!(entry.data, Some(json!([])));
    assert_eq!(entry.tags, vec![Tag::Driver]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn invalidate_drops_only_matching_entries() {
    let mut cache = cache_with_drivers_and_trips();
    let removed = cache.invalidate(&[Tag::Driver, Tag::AuditLog]);
    assert_eq!(removed, 1);
    assert!(cache.get("/drivers").is_none());
    assert!(cache.get("/trips/admin/all-trips").is_some());
}

#[test]
fn invalidate_advances_revision_of_each_tag() {
    let mut cache = QueryCache::default();
    assert_eq!(cache.revision(&[Tag::Assignment]), 0);
    cache.invalidate(&[Tag::Assignment]);
    cache.invalidate(&[Tag::Assignment, Tag::Driver]);
    assert_eq!(cache.revision(&[Tag::Assignment]), 2);
    assert_eq!(cache.revision(&[Tag::Driver]), 1);
    assert_eq!(cache.revision(&[Tag::Trip]), 0);
}

#[test]
fn unrelated_invalidation_leaves_revision_untouched() {
    let mut cache = QueryCache::default();
    let before = cache.revision(&[Tag::Payment]);
    cache.invalidate(&[Tag::Rating]);
    assert_eq!(cache.revision(&[Tag::Payment]), before);
}

#[test]
fn stale_payload_is_not_stored_after_invalidation() {
    let mut cache = QueryCache::default();
    let seen = cache.revision(&[Tag::Assignment]);
    cache.invalidate(&[Tag::Assignment]);
    let stored = cache.insert_if_current(
        "/assignments".to_owned(),
        vec![Tag::Assignment],
        Some(json!([{ "status": "pending" }])),
        seen,
    );
    assert!(!stored);
    assert!(cache.is_empty());
}

#[test]
fn clear_empties_entries() {
    let mut cache = cache_with_drivers_and_trips();
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn payload_in_flight_across_clear_is_dropped() {
    let mut cache = QueryCache::default();
    let seen = cache.revision(&[Tag::Driver]);
    cache.clear();
    assert_ne!(cache.revision(&[Tag::Driver]), seen);
    assert_ne!(cache.revision(&[Tag::Payment]), seen);
    assert!(!cache.insert_if_current("/drivers".to_owned(), vec![Tag::Driver], Some(json!([])), seen));
    assert!(cache.is_empty());
}
