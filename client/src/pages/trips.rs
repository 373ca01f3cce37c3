//! Trip monitoring and cancellation.

#[cfg(test)]
#[path = "trips_test.rs"]
mod trips_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::Trip;
use wire::resources::Trips;
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, Table};
use crate::components::resource_section::{confirmed_action, detail_section, list_section};
use crate::components::status_badge::badge;
use crate::net::resources;
use crate::util::format;

/// `pickup` / `drop` as sent by the API, title-cased for display.
pub(crate) fn trip_type(trip: &Trip) -> Cell {
    match trip.trip_type.as_deref().map(str::trim) {
        Some(kind) if !kind.is_empty() => {
            let mut chars = kind.chars();
            let label = chars.next().map(|c| c.to_uppercase().chain(chars).collect::<String>());
            Cell::opt(label.as_deref())
        }
        _ => Cell::Empty,
    }
}

fn columns() -> Vec<Column<Trip>> {
    vec![
        Column::new("Driver", |t: &Trip| Cell::opt(t.driver_name.as_deref().or(t.driver_id.as_deref()))),
        Column::new("School", |t: &Trip| Cell::opt(t.school_name.as_deref())),
        Column::new("Type", trip_type),
        Column::new("Scheduled", |t: &Trip| Cell::text(format::date_time(t.scheduled_at.as_deref()))),
        Column::new("Students", |t: &Trip| Cell::text(format::opt_count(t.student_count))),
        Column::new("Status", |t: &Trip| badge(t.status)),
    ]
}

fn detail_fields() -> Vec<Column<Trip>> {
    vec![
        Column::new("Driver", |t: &Trip| Cell::opt(t.driver_name.as_deref().or(t.driver_id.as_deref()))),
        Column::new("School", |t: &Trip| Cell::opt(t.school_name.as_deref())),
        Column::new("Type", trip_type),
        Column::new("Status", |t: &Trip| badge(t.status)),
        Column::new("Scheduled", |t: &Trip| Cell::text(format::date_time(t.scheduled_at.as_deref()))),
        Column::new("Started", |t: &Trip| Cell::text(format::date_time(t.started_at.as_deref()))),
        Column::new("Completed", |t: &Trip| Cell::text(format::date_time(t.completed_at.as_deref()))),
        Column::new("Students", |t: &Trip| Cell::text(format::opt_count(t.student_count))),
    ]
}

#[component]
pub fn TripsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Trips" allowed=Role::OPERATIONS>
            {trips_section()}
        </ConsoleLayout>
    }
}

fn trips_section() -> impl IntoView {
    let (cancel, confirm) =
        confirmed_action::<Trip, _, _>("Cancel trip", "Cancel trip".to_owned(), Trips::invalidates, resources::cancel_trip);
    let table = Table::new(columns())
        .with_actions(vec![cancel.when(|t| t.status.is_cancellable())])
        .with_detail(|t| format!("/trips/{}", t.id));
    view! {
        {list_section::<Trips>(table)}
        {confirm}
    }
}

#[component]
pub fn TripDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Trip" allowed=Role::OPERATIONS>
            {trip_detail()}
        </ConsoleLayout>
    }
}

fn trip_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/trips">"← All trips"</a>
        {detail_section::<Trips, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
