//! Partner schools and school detail.

#[cfg(test)]
#[path = "schools_test.rs"]
mod schools_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::{School, SchoolDraft};
use wire::resources::Schools;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column};
use crate::components::resource_section::{CrudConfig, crud_section, detail_section};
use crate::components::status_badge::active_badge;
use crate::util::form::{FieldSpec, FormValues, flag, flag_value, optional, text, values_from};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::textarea("address", "Address").required(),
    FieldSpec::text("city", "City"),
    FieldSpec::email("contactEmail", "Contact email"),
    FieldSpec::phone("contactPhone", "Contact phone"),
    FieldSpec::checkbox("isActive", "Active"),
];

#[allow(clippy::unnecessary_wraps)]
pub(crate) fn to_draft(values: &FormValues) -> Result<SchoolDraft, String> {
    Ok(SchoolDraft {
        name: text(values, "name"),
        address: text(values, "address"),
        city: optional(values, "city"),
        contact_email: optional(values, "contactEmail"),
        contact_phone: optional(values, "contactPhone"),
        is_active: flag(values, "isActive"),
    })
}

pub(crate) fn to_values(school: &School) -> FormValues {
    values_from([
        ("name", school.name.clone()),
        ("address", school.address.clone()),
        ("city", school.city.clone().unwrap_or_default()),
        ("contactEmail", school.contact_email.clone().unwrap_or_default()),
        ("contactPhone", school.contact_phone.clone().unwrap_or_default()),
        ("isActive", flag_value(school.is_active)),
    ])
}

fn columns() -> Vec<Column<School>> {
    vec![
        Column::new("Name", |s: &School| Cell::text(&s.name)),
        Column::new("City", |s: &School| Cell::opt(s.city.as_deref())),
        Column::new("Contact", |s: &School| Cell::opt(s.contact_phone.as_deref().or(s.contact_email.as_deref()))),
        Column::new("Students", |s: &School| Cell::text(format::opt_count(s.student_count))),
        Column::new("Status", |s: &School| active_badge(s.is_active)),
    ]
}

fn detail_fields() -> Vec<Column<School>> {
    vec![
        Column::new("Name", |s: &School| Cell::text(&s.name)),
        Column::new("Address", |s: &School| Cell::text(&s.address)),
        Column::new("City", |s: &School| Cell::opt(s.city.as_deref())),
        Column::new("Contact email", |s: &School| Cell::opt(s.contact_email.as_deref())),
        Column::new("Contact phone", |s: &School| Cell::opt(s.contact_phone.as_deref())),
        Column::new("Students", |s: &School| Cell::text(format::opt_count(s.student_count))),
        Column::new("Status", |s: &School| active_badge(s.is_active)),
        Column::new("Added", |s: &School| Cell::text(format::date(s.created_at.as_deref()))),
    ]
}

#[component]
pub fn SchoolsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Schools" allowed=Role::SCHOOL>
            {crud_section(
                CrudConfig::<Schools>::new(columns(), FIELDS, to_draft)
                    .editable(to_values)
                    .detail(|s| format!("/schools/{}", s.id)),
            )}
        </ConsoleLayout>
    }
}

#[component]
pub fn SchoolDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="School" allowed=Role::SCHOOL>
            {school_detail()}
        </ConsoleLayout>
    }
}

fn school_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/schools">"← All schools"</a>
        {detail_section::<Schools, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
