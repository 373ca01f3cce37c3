use super::*;

#[test]
fn cancelled_trip_is_negative() {
    assert_eq!(badge(TripStatus::Cancelled), Cell::Badge("Cancelled", Tone::Negative));
}

#[test]
fn assignments_awaiting_review_are_warnings() {
    assert_eq!(AssignmentStatus::Pending.tone(), Tone::Warning);
    assert_eq!(AssignmentStatus::ParentRequested.tone(), Tone::Warning);
    assert_eq!(badge(AssignmentStatus::ParentRequested), Cell::Badge("Parent requested", Tone::Warning));
}

#[test]
fn settled_payments_are_positive_and_refunds_informational() {
    assert_eq!(PaymentStatus::Completed.tone(), Tone::Positive);
    assert_eq!(PaymentStatus::Refunded.tone(), Tone::Info);
}

#[test]
fn unknown_values_render_neutral_or_warning() {
    assert_eq!(SubscriptionStatus::Unknown.tone(), Tone::Neutral);
    assert_eq!(VerificationStatus::Unknown.tone(), Tone::Neutral);
    assert_eq!(Role::Unknown.tone(), Tone::Warning);
}

#[test]
fn active_flag_badges() {
    assert_eq!(active_badge(true), Cell::Badge("Active", Tone::Positive));
    assert_eq!(active_badge(false).search_text(), "Inactive");
}
