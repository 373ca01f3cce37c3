//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::cache::QueryCache;
use crate::pages::{
    admins::AdminsPage,
    assignments::AssignmentsPage,
    audit_logs::AuditLogsPage,
    dashboard::DashboardPage,
    drivers::{DriverDetailPage, DriversPage},
    login::LoginPage,
    notifications::NotificationsPage,
    parents::{ParentDetailPage, ParentsPage},
    payments::{PaymentDetailPage, PaymentsPage},
    plans::PlansPage,
    ratings::RatingsPage,
    roles::RolesPage,
    schools::{SchoolDetailPage, SchoolsPage},
    students::{StudentDetailPage, StudentsPage},
    subscriptions::SubscriptionsPage,
    trips::{TripDetailPage, TripsPage},
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::install_session_check;
use crate::util::storage::install_ui_persistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI preference and query cache contexts, starts the
/// one-shot session check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let cache = RwSignal::new(QueryCache::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(cache);

    install_session_check(auth);
    install_ui_persistence(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/transit-admin.css"/>
        <Title text="Transit Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("admins") view=AdminsPage/>
                <Route path=StaticSegment("drivers") view=DriversPage/>
                <Route path=(StaticSegment("drivers"), ParamSegment("id")) view=DriverDetailPage/>
                <Route path=StaticSegment("parents") view=ParentsPage/>
                <Route path=(StaticSegment("parents"), ParamSegment("id")) view=ParentDetailPage/>
                <Route path=StaticSegment("students") view=StudentsPage/>
                <Route path=(StaticSegment("students"), ParamSegment("id")) view=StudentDetailPage/>
                <Route path=StaticSegment("schools") view=SchoolsPage/>
                <Route path=(StaticSegment("schools"), ParamSegment("id")) view=SchoolDetailPage/>
                <Route path=StaticSegment("trips") view=TripsPage/>
                <Route path=(StaticSegment("trips"), ParamSegment("id")) view=TripDetailPage/>
                <Route path=StaticSegment("assignments") view=AssignmentsPage/>
                <Route path=StaticSegment("plans") view=PlansPage/>
                <Route path=StaticSegment("subscriptions") view=SubscriptionsPage/>
                <Route path=StaticSegment("payments") view=PaymentsPage/>
                <Route path=(StaticSegment("payments"), ParamSegment("id")) view=PaymentDetailPage/>
                <Route path=StaticSegment("notifications") view=NotificationsPage/>
                <Route path=StaticSegment("ratings") view=RatingsPage/>
                <Route path=StaticSegment("roles") view=RolesPage/>
                <Route path=StaticSegment("audit-logs") view=AuditLogsPage/>
            </Routes>
        </Router>
    }
}
