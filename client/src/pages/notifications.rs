//! Broadcast notifications to parents, drivers and schools.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{Audience, Notification, NotificationDraft};
use wire::resources::Notifications;
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction, Tone};
use crate::components::query_status::MutationError;
use crate::components::resource_section::{CrudConfig, crud_section};
use crate::net::query::Mutation;
use crate::net::resources;
use crate::util::form::{FieldSpec, FormValues, text};
use crate::util::format;

const AUDIENCE_OPTIONS: &[(&str, &str)] =
    &[("all", "Everyone"), ("parents", "Parents"), ("drivers", "Drivers"), ("schools", "Schools")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title", "Title").required(),
    FieldSpec::textarea("message", "Message").required(),
    FieldSpec::select("audience", "Send to", AUDIENCE_OPTIONS).required(),
];

pub(crate) fn to_draft(values: &FormValues) -> Result<NotificationDraft, String> {
    let audience = match text(values, "audience").as_str() {
        "all" => Audience::All,
        "parents" => Audience::Parents,
        "drivers" => Audience::Drivers,
        "schools" => Audience::Schools,
        _ => return Err("Choose who receives the notification".to_owned()),
    };
    Ok(NotificationDraft { title: text(values, "title"), message: text(values, "message"), audience })
}

fn columns() -> Vec<Column<Notification>> {
    vec![
        Column::new("Title", |n: &Notification| Cell::text(&n.title)),
        Column::new("Message", |n: &Notification| Cell::text(&n.message)),
        Column::new("Audience", |n: &Notification| Cell::text(n.audience.label())),
        Column::new("Sent", |n: &Notification| Cell::text(format::date_time(n.created_at.as_deref()))),
        Column::new("Read", |n: &Notification| {
            if n.is_read { Cell::Badge("Read", Tone::Neutral) } else { Cell::Badge("Unread", Tone::Info) }
        }),
    ]
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Notifications" allowed=Role::STAFF>
            {notifications_section()}
        </ConsoleLayout>
    }
}

fn notifications_section() -> impl IntoView {
    let read = Mutation::new();
    let mark_read = Callback::new(move |n: Notification| {
        read.run(Notifications::invalidates(), resources::mark_notification_read(n.id), |_| ());
    });
    let config = CrudConfig::<Notifications>::new(columns(), FIELDS, to_draft)
        .actions(vec![RowAction::new("Mark read", mark_read).when(|n| !n.is_read)]);

    view! {
        <MutationError mutation=read />
        {crud_section(config)}
    }
}
