//! Driver↔student and driver↔school assignments, including parent requests
//! that wait for a staff decision.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{Assignment, AssignmentDraft, AssignmentKind};
use wire::resources::Assignments;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction};
use crate::components::query_status::MutationError;
use crate::components::resource_section::{CrudConfig, crud_section};
use crate::components::status_badge::badge;
use crate::net::query::Mutation;
use crate::net::resources;
use crate::util::form::{FieldSpec, FormValues, optional, text};
use crate::util::format;

const KIND_OPTIONS: &[(&str, &str)] = &[("driver_student", "Driver ↔ Student"), ("driver_school", "Driver ↔ School")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select("kind", "Type", KIND_OPTIONS).required(),
    FieldSpec::text("driverId", "Driver ID").required(),
    FieldSpec::text("studentId", "Student ID"),
    FieldSpec::text("schoolId", "School ID"),
];

pub(crate) fn parse_kind(value: &str) -> Option<AssignmentKind> {
    match value.trim() {
        "driver_student" => Some(AssignmentKind::DriverStudent),
        "driver_school" => Some(AssignmentKind::DriverSchool),
        _ => None,
    }
}

/// Only the target matching the kind is sent.
pub(crate) fn to_draft(values: &FormValues) -> Result<AssignmentDraft, String> {
    let kind = parse_kind(&text(values, "kind")).ok_or_else(|| "Choose an assignment type".to_owned())?;
    let (student_id, school_id) = match kind {
        AssignmentKind::DriverStudent => {
            (Some(optional(values, "studentId").ok_or_else(|| "Student ID is required".to_owned())?), None)
        }
        AssignmentKind::DriverSchool => {
            (None, Some(optional(values, "schoolId").ok_or_else(|| "School ID is required".to_owned())?))
        }
    };
    Ok(AssignmentDraft { kind, driver_id: text(values, "driverId"), student_id, school_id })
}

fn columns() -> Vec<Column<Assignment>> {
    vec![
        Column::new("Type", |a: &Assignment| Cell::text(a.kind.label())),
        Column::new("Driver", |a: &Assignment| Cell::text(a.driver_name.as_deref().unwrap_or(&a.driver_id))),
        Column::new("Assigned to", |a: &Assignment| Cell::opt(a.target_name())),
        Column::new("Requested by", |a: &Assignment| Cell::opt(a.requested_by.as_deref())),
        Column::new("Created", |a: &Assignment| Cell::text(format::date(a.created_at.as_deref()))),
        Column::new("Status", |a: &Assignment| badge(a.status)),
    ]
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Assignments" allowed=Role::STAFF>
            {assignments_section()}
        </ConsoleLayout>
    }
}

fn assignments_section() -> impl IntoView {
    let review = Mutation::new();
    let approve = Callback::new(move |a: Assignment| {
        review.run(Assignments::review_invalidates(), resources::approve_assignment(a.id), |_| ());
    });
    let reject = Callback::new(move |a: Assignment| {
        review.run(Assignments::review_invalidates(), resources::reject_assignment(a.id), |_| ());
    });

    let config = CrudConfig::<Assignments>::new(columns(), FIELDS, to_draft)
        .invalidates(Assignments::review_invalidates)
        .actions(vec![
            RowAction::new("Approve", approve).when(|a| a.status.awaits_review()),
            RowAction::new("Reject", reject).danger().when(|a| a.status.awaits_review()),
        ]);

    view! {
        <MutationError mutation=review />
        {crud_section(config)}
    }
}
