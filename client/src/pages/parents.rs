//! Parent accounts and parent detail.

#[cfg(test)]
#[path = "parents_test.rs"]
mod parents_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::{Parent, ParentDraft};
use wire::resources::Parents;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column};
use crate::components::resource_section::{CrudConfig, crud_section, detail_section};
use crate::components::status_badge::active_badge;
use crate::util::form::{FieldSpec, FormValues, flag, flag_value, optional, text, values_from};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::phone("phone", "Phone").required(),
    FieldSpec::email("email", "Email"),
    FieldSpec::textarea("address", "Address"),
    FieldSpec::checkbox("isActive", "Active"),
];

#[allow(clippy::unnecessary_wraps)]
pub(crate) fn to_draft(values: &FormValues) -> Result<ParentDraft, String> {
    Ok(ParentDraft {
        name: text(values, "name"),
        email: optional(values, "email"),
        phone: text(values, "phone"),
        address: optional(values, "address"),
        is_active: flag(values, "isActive"),
    })
}

pub(crate) fn to_values(parent: &Parent) -> FormValues {
    values_from([
        ("name", parent.name.clone()),
        ("phone", parent.phone.clone()),
        ("email", parent.email.clone().unwrap_or_default()),
        ("address", parent.address.clone().unwrap_or_default()),
        ("isActive", flag_value(parent.is_active)),
    ])
}

fn columns() -> Vec<Column<Parent>> {
    vec![
        Column::new("Name", |p: &Parent| Cell::text(&p.name)),
        Column::new("Phone", |p: &Parent| Cell::text(&p.phone)),
        Column::new("Email", |p: &Parent| Cell::opt(p.email.as_deref())),
        Column::new("Children", |p: &Parent| Cell::text(format::opt_count(p.children_count))),
        Column::new("Status", |p: &Parent| active_badge(p.is_active)),
    ]
}

fn detail_fields() -> Vec<Column<Parent>> {
    vec![
        Column::new("Name", |p: &Parent| Cell::text(&p.name)),
        Column::new("Phone", |p: &Parent| Cell::text(&p.phone)),
        Column::new("Email", |p: &Parent| Cell::opt(p.email.as_deref())),
        Column::new("Address", |p: &Parent| Cell::opt(p.address.as_deref())),
        Column::new("Children", |p: &Parent| Cell::text(format::opt_count(p.children_count))),
        Column::new("Status", |p: &Parent| active_badge(p.is_active)),
        Column::new("Joined", |p: &Parent| Cell::text(format::date(p.created_at.as_deref()))),
    ]
}

#[component]
pub fn ParentsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Parents" allowed=Role::STAFF>
            {crud_section(
                CrudConfig::<Parents>::new(columns(), FIELDS, to_draft)
                    .editable(to_values)
                    .detail(|p| format!("/parents/{}", p.id)),
            )}
        </ConsoleLayout>
    }
}

#[component]
pub fn ParentDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Parent" allowed=Role::STAFF>
            {parent_detail()}
        </ConsoleLayout>
    }
}

fn parent_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/parents">"← All parents"</a>
        {detail_section::<Parents, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
