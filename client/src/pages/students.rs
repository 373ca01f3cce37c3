//! Student records and student detail.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::{Student, StudentDraft};
use wire::resources::Students;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column};
use crate::components::resource_section::{CrudConfig, crud_section, detail_section};
use crate::components::status_badge::active_badge;
use crate::util::form::{FieldSpec, FormValues, flag, flag_value, optional, text, values_from};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("grade", "Grade"),
    FieldSpec::text("parentId", "Parent ID").required(),
    FieldSpec::text("schoolId", "School ID").required(),
    FieldSpec::textarea("pickupAddress", "Pickup address"),
    FieldSpec::checkbox("isActive", "Active"),
];

#[allow(clippy::unnecessary_wraps)]
pub(crate) fn to_draft(values: &FormValues) -> Result<StudentDraft, String> {
    Ok(StudentDraft {
        name: text(values, "name"),
        grade: optional(values, "grade"),
        parent_id: text(values, "parentId"),
        school_id: text(values, "schoolId"),
        pickup_address: optional(values, "pickupAddress"),
        is_active: flag(values, "isActive"),
    })
}

pub(crate) fn to_values(student: &Student) -> FormValues {
    values_from([
        ("name", student.name.clone()),
        ("grade", student.grade.clone().unwrap_or_default()),
        ("parentId", student.parent_id.clone().unwrap_or_default()),
        ("schoolId", student.school_id.clone().unwrap_or_default()),
        ("pickupAddress", student.pickup_address.clone().unwrap_or_default()),
        ("isActive", flag_value(student.is_active)),
    ])
}

/// Name when the API joined it, otherwise the raw id.
fn named(name: Option<&str>, id: Option<&str>) -> Cell {
    Cell::opt(name.or(id))
}

fn columns() -> Vec<Column<Student>> {
    vec![
        Column::new("Name", |s: &Student| Cell::text(&s.name)),
        Column::new("Grade", |s: &Student| Cell::opt(s.grade.as_deref())),
        Column::new("Parent", |s: &Student| named(s.parent_name.as_deref(), s.parent_id.as_deref())),
        Column::new("School", |s: &Student| named(s.school_name.as_deref(), s.school_id.as_deref())),
        Column::new("Status", |s: &Student| active_badge(s.is_active)),
    ]
}

fn detail_fields() -> Vec<Column<Student>> {
    vec![
        Column::new("Name", |s: &Student| Cell::text(&s.name)),
        Column::new("Grade", |s: &Student| Cell::opt(s.grade.as_deref())),
        Column::new("Parent", |s: &Student| named(s.parent_name.as_deref(), s.parent_id.as_deref())),
        Column::new("School", |s: &Student| named(s.school_name.as_deref(), s.school_id.as_deref())),
        Column::new("Pickup address", |s: &Student| Cell::opt(s.pickup_address.as_deref())),
        Column::new("Status", |s: &Student| active_badge(s.is_active)),
        Column::new("Enrolled", |s: &Student| Cell::text(format::date(s.created_at.as_deref()))),
    ]
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Students" allowed=Role::SCHOOL>
            {crud_section(
                CrudConfig::<Students>::new(columns(), FIELDS, to_draft)
                    .editable(to_values)
                    .detail(|s| format!("/students/{}", s.id)),
            )}
        </ConsoleLayout>
    }
}

#[component]
pub fn StudentDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Student" allowed=Role::SCHOOL>
            {student_detail()}
        </ConsoleLayout>
    }
}

fn student_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/students">"← All students"</a>
        {detail_section::<Students, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
