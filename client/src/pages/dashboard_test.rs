use super::*;

fn stats() -> DashboardStats {
    DashboardStats {
        total_drivers: 42,
        total_parents: 310,
        total_students: 455,
        total_schools: 12,
        active_trips: 7,
        pending_assignments: 3,
        pending_driver_verifications: 5,
        active_subscriptions: 280,
        total_revenue: 1_234_567.5,
    }
}

#[test]
fn cards_show_counts_and_revenue() {
    let cards = stat_cards(&stats());
    assert_eq!(cards[0], StatCard { label: "Drivers", value: "42".to_owned(), href: "/drivers" });
    let revenue = cards.iter().find(|c| c.label == "Revenue").expect("revenue card");
    assert_eq!(revenue.value, format_amount(1_234_567.5, "INR"));
}

#[test]
fn empty_stats_render_zeroes() {
    let cards = stat_cards(&DashboardStats::default());
    assert!(cards.iter().filter(|c| c.label != "Revenue").all(|c| c.value == "0"));
}

#[test]
fn school_admin_only_sees_school_cards() {
    let labels: Vec<_> = cards_for(Some(Role::SchoolAdmin), &stats()).into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Students", "Schools"]);
}

#[test]
fn super_admin_sees_every_card() {
    assert_eq!(cards_for(Some(Role::SuperAdmin), &stats()).len(), stat_cards(&stats()).len());
}

#[test]
fn no_session_sees_no_cards() {
    assert!(cards_for(None, &stats()).is_empty());
}
