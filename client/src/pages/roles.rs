//! Role definitions and their permission lists.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{RoleDraft, RoleRecord};
use wire::resources::Roles;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column};
use crate::components::resource_section::{CrudConfig, crud_section};
use crate::util::form::{FieldSpec, FormValues, optional, text, values_from};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::textarea("description", "Description"),
    FieldSpec::textarea("permissions", "Permissions (comma or line separated)"),
];

/// Split on commas and newlines, drop blanks and duplicates, keep order.
pub(crate) fn parse_permissions(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw.split([',', '\n']).map(str::trim).filter(|p| !p.is_empty()) {
        if !out.iter().any(|p| p == entry) {
            out.push(entry.to_owned());
        }
    }
    out
}

#[allow(clippy::unnecessary_wraps)]
pub(crate) fn to_draft(values: &FormValues) -> Result<RoleDraft, String> {
    Ok(RoleDraft {
        name: text(values, "name"),
        description: optional(values, "description"),
        permissions: parse_permissions(&text(values, "permissions")),
    })
}

pub(crate) fn to_values(role: &RoleRecord) -> FormValues {
    values_from([
        ("name", role.name.clone()),
        ("description", role.description.clone().unwrap_or_default()),
        ("permissions", role.permissions.join("\n")),
    ])
}

fn permission_summary(role: &RoleRecord) -> Cell {
    match role.permissions.as_slice() {
        [] => Cell::Empty,
        [only] => Cell::text(only),
        [first, rest @ ..] => Cell::text(format!("{first} +{}", rest.len())),
    }
}

fn columns() -> Vec<Column<RoleRecord>> {
    vec![
        Column::new("Name", |r: &RoleRecord| Cell::text(&r.name)),
        Column::new("Description", |r: &RoleRecord| Cell::opt(r.description.as_deref())),
        Column::new("Permissions", permission_summary),
    ]
}

#[component]
pub fn RolesPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Roles" allowed=Role::SUPER>
            {crud_section(CrudConfig::<Roles>::new(columns(), FIELDS, to_draft).editable(to_values))}
        </ConsoleLayout>
    }
}
