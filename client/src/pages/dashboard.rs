//! Landing page with platform-wide counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role lands here after sign-in. The counters come from one cached
//! read tagged `Dashboard`, which every resource mutation invalidates, so
//! the numbers refresh after any write made elsewhere in the console.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::envelope::decode_data;
use wire::models::DashboardStats;
use wire::payments::format_amount;
use wire::resources::paths;
use wire::Tag;

use crate::components::console_layout::{ConsoleLayout, visible_nav};
use crate::components::query_status::query_banner;
use crate::net::query::use_query;
use crate::state::auth::AuthState;

/// One counter card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    /// Screen with the underlying records.
    pub href: &'static str,
}

/// Counter cards in display order.
#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let card = |label, value: u64, href| StatCard { label, value: value.to_string(), href };
    vec![
        card("Drivers", stats.total_drivers, "/drivers"),
        card("Pending verifications", stats.pending_driver_verifications, "/drivers"),
        card("Parents", stats.total_parents, "/parents"),
        card("Students", stats.total_students, "/students"),
        card("Schools", stats.total_schools, "/schools"),
        card("Active trips", stats.active_trips, "/trips"),
        card("Pending assignments", stats.pending_assignments, "/assignments"),
        card("Active subscriptions", stats.active_subscriptions, "/subscriptions"),
        StatCard { label: "Revenue", value: format_amount(stats.total_revenue, "INR"), href: "/payments" },
    ]
}

/// Cards whose target screen `role` may open.
#[must_use]
pub fn cards_for(role: Option<Role>, stats: &DashboardStats) -> Vec<StatCard> {
    let nav = visible_nav(role);
    stat_cards(stats).into_iter().filter(|card| nav.iter().any(|item| item.href == card.href)).collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Dashboard" allowed=Role::ALL>
            {dashboard()}
        </ConsoleLayout>
    }
}

fn dashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stats = use_query(
        vec![Tag::Dashboard],
        || Some(paths::DASHBOARD_STATS.to_owned()),
        decode_data::<DashboardStats>,
    );

    let cards = move || {
        let role = auth.get().role();
        stats.with(|s| s.ready().map(|stats| cards_for(role, stats))).unwrap_or_default()
    };

    view! {
        <section class="section">
            {query_banner(stats)}
            <div class="stat-grid">
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| {
                            view! {
                                <a class="stat-card" href=card.href>
                                    <span class="stat-card__value">{card.value}</span>
                                    <span class="stat-card__label">{card.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
