//! Driver roster, document verification, and driver detail.

#[cfg(test)]
#[path = "drivers_test.rs"]
mod drivers_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::{Driver, DriverDraft, VerificationStatus};
use wire::resources::Drivers;
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction};
use crate::components::query_status::MutationError;
use crate::components::resource_section::{CrudConfig, crud_section, detail_section};
use crate::components::status_badge::{active_badge, badge};
use crate::net::query::Mutation;
use crate::net::resources;
use crate::util::form::{FieldSpec, FormValues, flag, flag_value, optional, parse_opt_u32, text, values_from};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::phone("phone", "Phone").required(),
    FieldSpec::email("email", "Email"),
    FieldSpec::text("licenseNumber", "License number"),
    FieldSpec::text("vehicleNumber", "Vehicle number"),
    FieldSpec::text("vehicleModel", "Vehicle model"),
    FieldSpec::number("seatCapacity", "Seat capacity"),
    FieldSpec::checkbox("isActive", "Active"),
];

pub(crate) fn to_draft(values: &FormValues) -> Result<DriverDraft, String> {
    Ok(DriverDraft {
        name: text(values, "name"),
        email: optional(values, "email"),
        phone: text(values, "phone"),
        license_number: optional(values, "licenseNumber"),
        vehicle_number: optional(values, "vehicleNumber"),
        vehicle_model: optional(values, "vehicleModel"),
        seat_capacity: parse_opt_u32(values, "seatCapacity", "Seat capacity")?,
        is_active: flag(values, "isActive"),
    })
}

pub(crate) fn to_values(driver: &Driver) -> FormValues {
    values_from([
        ("name", driver.name.clone()),
        ("phone", driver.phone.clone()),
        ("email", driver.email.clone().unwrap_or_default()),
        ("licenseNumber", driver.license_number.clone().unwrap_or_default()),
        ("vehicleNumber", driver.vehicle_number.clone().unwrap_or_default()),
        ("vehicleModel", driver.vehicle_model.clone().unwrap_or_default()),
        ("seatCapacity", driver.seat_capacity.map(|n| n.to_string()).unwrap_or_default()),
        ("isActive", flag_value(driver.is_active)),
    ])
}

fn vehicle(driver: &Driver) -> Cell {
    match (driver.vehicle_number.as_deref(), driver.vehicle_model.as_deref()) {
        (Some(number), Some(model)) => Cell::text(format!("{number} ({model})")),
        (number, model) => Cell::opt(number.or(model)),
    }
}

fn columns() -> Vec<Column<Driver>> {
    vec![
        Column::new("Name", |d: &Driver| Cell::text(&d.name)),
        Column::new("Phone", |d: &Driver| Cell::text(&d.phone)),
        Column::new("Vehicle", vehicle),
        Column::new("Verification", |d: &Driver| badge(d.verification_status)),
        Column::new("Status", |d: &Driver| active_badge(d.is_active)),
    ]
}

fn detail_fields() -> Vec<Column<Driver>> {
    vec![
        Column::new("Name", |d: &Driver| Cell::text(&d.name)),
        Column::new("Phone", |d: &Driver| Cell::text(&d.phone)),
        Column::new("Email", |d: &Driver| Cell::opt(d.email.as_deref())),
        Column::new("License", |d: &Driver| Cell::opt(d.license_number.as_deref())),
        Column::new("Vehicle", vehicle),
        Column::new("Seats", |d: &Driver| Cell::text(format::opt_count(d.seat_capacity))),
        Column::new("Rating", |d: &Driver| Cell::text(format::rating(d.rating))),
        Column::new("Verification", |d: &Driver| badge(d.verification_status)),
        Column::new("Status", |d: &Driver| active_badge(d.is_active)),
        Column::new("Joined", |d: &Driver| Cell::text(format::date(d.created_at.as_deref()))),
    ]
}

/// Drivers still waiting on, or previously refused, document approval.
pub(crate) fn can_approve(driver: &Driver) -> bool {
    driver.verification_status != VerificationStatus::Approved
}

pub(crate) fn can_reject(driver: &Driver) -> bool {
    driver.verification_status == VerificationStatus::Pending
}

#[component]
pub fn DriversPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Drivers" allowed=Role::STAFF>
            {drivers_section()}
        </ConsoleLayout>
    }
}

fn drivers_section() -> impl IntoView {
    let review = Mutation::new();
    let approve = Callback::new(move |d: Driver| {
        review.run(Drivers::invalidates(), resources::verify_driver(d.id, VerificationStatus::Approved), |_| ());
    });
    let reject = Callback::new(move |d: Driver| {
        review.run(Drivers::invalidates(), resources::verify_driver(d.id, VerificationStatus::Rejected), |_| ());
    });

    let config = CrudConfig::<Drivers>::new(columns(), FIELDS, to_draft)
        .editable(to_values)
        .detail(|d| format!("/drivers/{}", d.id))
        .actions(vec![
            RowAction::new("Approve", approve).when(can_approve),
            RowAction::new("Reject", reject).danger().when(can_reject),
        ]);

    view! {
        <MutationError mutation=review />
        {crud_section(config)}
    }
}

#[component]
pub fn DriverDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Driver" allowed=Role::STAFF>
            {driver_detail()}
        </ConsoleLayout>
    }
}

fn driver_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/drivers">"← All drivers"</a>
        {detail_section::<Drivers, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
