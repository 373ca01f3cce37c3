//! Read-only trail of console writes.

#[cfg(test)]
#[path = "audit_logs_test.rs"]
mod audit_logs_test;

use leptos::prelude::*;
use serde_json::Value;
use wire::auth::Role;
use wire::models::AuditLog;
use wire::resources::AuditLogs;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, Table};
use crate::components::resource_section::list_section;
use crate::util::format;

const DETAILS_LIMIT: usize = 80;

/// One-line rendering of the free-form `details` payload.
///
/// Objects become `key=value` pairs; anything past `DETAILS_LIMIT` characters
/// is cut with an ellipsis.
pub(crate) fn details_summary(details: Option<&Value>) -> Cell {
    let line = match details {
        None | Some(Value::Null) => return Cell::Empty,
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) if map.is_empty() => return Cell::Empty,
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{k}={s}"),
                other => format!("{k}={other}"),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    };
    if line.chars().count() > DETAILS_LIMIT {
        let cut: String = line.chars().take(DETAILS_LIMIT).collect();
        return Cell::text(format!("{cut}…"));
    }
    Cell::opt(Some(line.as_str()))
}

fn target(log: &AuditLog) -> Cell {
    match log.resource_id.as_deref() {
        Some(id) => Cell::text(format!("{} {id}", log.resource)),
        None => Cell::text(&log.resource),
    }
}

fn columns() -> Vec<Column<AuditLog>> {
    vec![
        Column::new("When", |l: &AuditLog| Cell::text(format::date_time(l.created_at.as_deref()))),
        Column::new("Actor", |l: &AuditLog| Cell::opt(l.actor.as_deref())),
        Column::new("Action", |l: &AuditLog| Cell::text(&l.action)),
        Column::new("Target", target),
        Column::new("Details", |l: &AuditLog| details_summary(l.details.as_ref())),
    ]
}

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Audit logs" allowed=Role::SUPER>
            {list_section::<AuditLogs>(Table::new(columns()))}
        </ConsoleLayout>
    }
}
