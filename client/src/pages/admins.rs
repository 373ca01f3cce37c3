//! Console operator accounts (super admins only).

#[cfg(test)]
#[path = "admins_test.rs"]
mod admins_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{Admin, AdminDraft};
use wire::resources::Admins;
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction};
use crate::components::query_status::MutationError;
use crate::components::resource_section::{CrudConfig, crud_section};
use crate::components::status_badge::{active_badge, badge};
use crate::net::query::Mutation;
use crate::net::resources;
use crate::util::form::{FieldSpec, FormValues, optional, text, values_from};
use crate::util::format;

const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("admin", "Admin"),
    ("school_admin", "School Admin"),
    ("support", "Support"),
    ("super_admin", "Super Admin"),
];

const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::email("email", "Email").required(),
    FieldSpec::phone("phone", "Phone"),
    FieldSpec::select("role", "Role", ROLE_OPTIONS).required(),
    FieldSpec::password("password", "Password").required(),
];

/// Editing keeps the current password unless a new one is typed.
const EDIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::email("email", "Email").required(),
    FieldSpec::phone("phone", "Phone"),
    FieldSpec::select("role", "Role", ROLE_OPTIONS).required(),
    FieldSpec::password("password", "New password"),
];

pub(crate) fn to_draft(values: &FormValues) -> Result<AdminDraft, String> {
    let role = Role::parse(&text(values, "role"));
    if role == Role::Unknown {
        return Err("Choose a role".to_owned());
    }
    Ok(AdminDraft {
        name: text(values, "name"),
        email: text(values, "email"),
        phone: optional(values, "phone"),
        role,
        password: optional(values, "password"),
    })
}

pub(crate) fn to_values(admin: &Admin) -> FormValues {
    values_from([
        ("name", admin.name.clone()),
        ("email", admin.email.clone()),
        ("phone", admin.phone.clone().unwrap_or_default()),
        ("role", admin.role.as_str().to_owned()),
        ("password", String::new()),
    ])
}

fn columns() -> Vec<Column<Admin>> {
    vec![
        Column::new("Name", |a: &Admin| Cell::text(&a.name)),
        Column::new("Email", |a: &Admin| Cell::text(&a.email)),
        Column::new("Role", |a: &Admin| badge(a.role)),
        Column::new("Status", |a: &Admin| active_badge(a.is_active)),
        Column::new("Last login", |a: &Admin| Cell::text(format::date_time(a.last_login.as_deref()))),
    ]
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Admins" allowed=Role::SUPER>
            {admins_section()}
        </ConsoleLayout>
    }
}

fn admins_section() -> impl IntoView {
    let status = Mutation::new();
    let toggle = Callback::new(move |admin: Admin| {
        status.run(Admins::invalidates(), resources::set_admin_active(admin.id, !admin.is_active), |_| ());
    });

    let config = CrudConfig::<Admins>::new(columns(), CREATE_FIELDS, to_draft)
        .editable(to_values)
        .edit_fields(EDIT_FIELDS)
        .actions(vec![
            RowAction::new("Disable", toggle).when(|a| a.is_active),
            RowAction::new("Enable", toggle).when(|a| !a.is_active),
        ]);

    view! {
        <MutationError mutation=status />
        {crud_section(config)}
    }
}
