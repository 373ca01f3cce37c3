//! Console chrome: navigation rail, header, preference toggles, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside `ConsoleLayout`, which applies the
//! page's role allow-list through `RoleGate` and only lists navigation
//! entries the current role may open.

#[cfg(test)]
#[path = "console_layout_test.rs"]
mod console_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::auth::Role;

use super::role_gate::RoleGate;
use crate::net::cache::QueryCache;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;

/// One navigation rail entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub allowed: &'static [Role],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Dashboard", allowed: Role::ALL },
    NavItem { href: "/admins", label: "Admins", allowed: Role::SUPER },
    NavItem { href: "/drivers", label: "Drivers", allowed: Role::STAFF },
    NavItem { href: "/parents", label: "Parents", allowed: Role::STAFF },
    NavItem { href: "/students", label: "Students", allowed: Role::SCHOOL },
    NavItem { href: "/schools", label: "Schools", allowed: Role::SCHOOL },
    NavItem { href: "/trips", label: "Trips", allowed: Role::OPERATIONS },
    NavItem { href: "/assignments", label: "Assignments", allowed: Role::STAFF },
    NavItem { href: "/plans", label: "Plans", allowed: Role::STAFF },
    NavItem { href: "/subscriptions", label: "Subscriptions", allowed: Role::STAFF },
    NavItem { href: "/payments", label: "Payments", allowed: Role::STAFF },
    NavItem { href: "/notifications", label: "Notifications", allowed: Role::STAFF },
    NavItem { href: "/ratings", label: "Ratings", allowed: Role::OPERATIONS },
    NavItem { href: "/roles", label: "Roles", allowed: Role::SUPER },
    NavItem { href: "/audit-logs", label: "Audit logs", allowed: Role::SUPER },
];

/// Navigation entries `role` may open; nothing without a verified role.
#[must_use]
pub fn visible_nav(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ITEMS.iter().filter(|item| item.allowed.contains(&role)).collect()
}

/// Page frame for a protected route.
#[component]
pub fn ConsoleLayout(title: &'static str, allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let navigate = use_navigate();

    let on_logout = move |_| sign_out(auth, cache, navigate.clone());
    let shell_class = move || if ui.get().nav_collapsed { "console console--collapsed" } else { "console" };
    let role_label = move || auth.get().role().map_or("", Role::label);

    let nav = move || {
        visible_nav(auth.get().role())
            .into_iter()
            .map(|item| {
                view! {
                    <a class="console__nav-link" href=item.href title=item.label>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class=shell_class>
            <nav class="console__nav" aria-label="Sections">
                <button
                    class="btn console__nav-toggle"
                    title="Collapse navigation"
                    on:click=move |_| ui.update(|u| u.nav_collapsed = !u.nav_collapsed)
                >
                    {move || if ui.get().nav_collapsed { "»" } else { "«" }}
                </button>
                {nav}
            </nav>
            <div class="console__body">
                <header class="console__header">
                    <h1 class="console__title">{title}</h1>
                    <span class="console__spacer"></span>
                    <label class="console__pref">
                        <input
                            type="checkbox"
                            prop:checked=move || ui.get().dense_tables
                            on:change=move |ev| {
                                let dense = event_target_checked(&ev);
                                ui.update(|u| u.dense_tables = dense);
                            }
                        />
                        "Compact tables"
                    </label>
                    <span class="console__role">{role_label}</span>
                    <button class="btn console__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="console__main">
                    <RoleGate allowed=allowed>{children()}</RoleGate>
                </main>
            </div>
        </div>
    }
}
