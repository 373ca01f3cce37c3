//! Subscription plans sold to parents and schools.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{PlanAudience, SubscriptionPlan, SubscriptionPlanDraft};
use wire::payments::format_amount;
use wire::resources::SubscriptionPlans;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column};
use crate::components::resource_section::{CrudConfig, crud_section};
use crate::components::status_badge::active_badge;
use crate::util::form::{FieldSpec, FormValues, flag, flag_value, optional, parse_f64, parse_u32, text, values_from};

const AUDIENCE_OPTIONS: &[(&str, &str)] = &[("parent", "Parent"), ("school", "School")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::textarea("description", "Description"),
    FieldSpec::number("price", "Price (INR)").required(),
    FieldSpec::number("durationDays", "Duration (days)").required(),
    FieldSpec::select("audience", "Sold to", AUDIENCE_OPTIONS).required(),
    FieldSpec::checkbox("isActive", "Active"),
];

pub(crate) fn to_draft(values: &FormValues) -> Result<SubscriptionPlanDraft, String> {
    let duration_days = parse_u32(values, "durationDays", "Duration")?;
    if duration_days == 0 {
        return Err("Duration must be at least one day".to_owned());
    }
    let audience = match text(values, "audience").as_str() {
        "school" => PlanAudience::School,
        _ => PlanAudience::Parent,
    };
    Ok(SubscriptionPlanDraft {
        name: text(values, "name"),
        description: optional(values, "description"),
        price: parse_f64(values, "price", "Price")?,
        duration_days,
        audience,
        is_active: flag(values, "isActive"),
    })
}

pub(crate) fn to_values(plan: &SubscriptionPlan) -> FormValues {
    values_from([
        ("name", plan.name.clone()),
        ("description", plan.description.clone().unwrap_or_default()),
        ("price", plan.price.to_string()),
        ("durationDays", plan.duration_days.to_string()),
        ("audience", plan.audience.as_str().to_owned()),
        ("isActive", flag_value(plan.is_active)),
    ])
}

pub(crate) fn duration(days: u32) -> String {
    match days {
        1 => "1 day".to_owned(),
        n if n >= 365 && n % 365 == 0 => format!("{} yr", n / 365),
        n if n >= 30 && n % 30 == 0 => format!("{} mo", n / 30),
        n => format!("{n} days"),
    }
}

fn columns() -> Vec<Column<SubscriptionPlan>> {
    vec![
        Column::new("Name", |p: &SubscriptionPlan| Cell::text(&p.name)),
        Column::new("Sold to", |p: &SubscriptionPlan| Cell::text(p.audience.label())),
        Column::new("Price", |p: &SubscriptionPlan| Cell::text(format_amount(p.price, "INR"))),
        Column::new("Duration", |p: &SubscriptionPlan| Cell::text(duration(p.duration_days))),
        Column::new("Status", |p: &SubscriptionPlan| active_badge(p.is_active)),
    ]
}

#[component]
pub fn PlansPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Subscription plans" allowed=Role::STAFF>
            {crud_section(CrudConfig::<SubscriptionPlans>::new(columns(), FIELDS, to_draft).editable(to_values))}
        </ConsoleLayout>
    }
}
