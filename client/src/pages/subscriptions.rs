//! Parent subscriptions, school subscriptions and their redemption codes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parents subscribe themselves through the mobile app, so the console only
//! lists and cancels them. School subscriptions are sold by staff: they are
//! created here, and each one can issue redemption codes that parents enter
//! to claim a seat. Generating codes invalidates the code list below.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;
use wire::auth::Role;
use wire::models::{
    ParentSubscription, RedemptionCode, SchoolSubscription, SchoolSubscriptionDraft, SubscriptionStatus,
};
use wire::resources::{ParentSubscriptions, RedemptionCodes, SchoolSubscriptions};
use wire::Resource;

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction, Table, Tone};
use crate::components::form_dialog::FormDialog;
use crate::components::resource_section::{CrudConfig, confirmed_action, crud_section, list_section};
use crate::components::status_badge::badge;
use crate::net::query::Mutation;
use crate::net::resources;
use crate::util::form::{FieldErrors, FieldSpec, FormValues, initial_values, optional, parse_u32, text, values_from};
use crate::util::format;

const SCHOOL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("schoolId", "School ID").required(),
    FieldSpec::text("planId", "Plan ID").required(),
    FieldSpec::number("seats", "Seats").required(),
    FieldSpec::date("startDate", "Start date"),
];

const CODE_FIELDS: &[FieldSpec] = &[FieldSpec::number("count", "Number of codes").required()];

/// Upper bound per request; larger batches are split by the operator.
pub(crate) const MAX_CODES: u32 = 500;

pub(crate) fn to_draft(values: &FormValues) -> Result<SchoolSubscriptionDraft, String> {
    let seats = parse_u32(values, "seats", "Seats")?;
    if seats == 0 {
        return Err("Seats must be at least 1".to_owned());
    }
    Ok(SchoolSubscriptionDraft {
        school_id: text(values, "schoolId"),
        plan_id: text(values, "planId"),
        seats,
        start_date: optional(values, "startDate"),
    })
}

pub(crate) fn to_values(sub: &SchoolSubscription) -> FormValues {
    values_from([
        ("schoolId", sub.school_id.clone()),
        ("planId", sub.plan_id.clone()),
        ("seats", sub.seats.to_string()),
        ("startDate", format::date_input(sub.start_date.as_deref())),
    ])
}

pub(crate) fn code_count(values: &FormValues) -> Result<u32, String> {
    let count = parse_u32(values, "count", "Number of codes")?;
    match count {
        0 => Err("Number of codes must be at least 1".to_owned()),
        n if n > MAX_CODES => Err(format!("At most {MAX_CODES} codes per request")),
        n => Ok(n),
    }
}

/// `used / total` seats.
pub(crate) fn seat_usage(sub: &SchoolSubscription) -> String {
    format!("{} / {}", sub.seats_used.unwrap_or(0), sub.seats)
}

pub(crate) fn is_cancellable(sub: &ParentSubscription) -> bool {
    matches!(sub.status, SubscriptionStatus::Active | SubscriptionStatus::Pending)
}

fn period(start: Option<&str>, end: Option<&str>) -> Cell {
    match (start, end) {
        (None, None) => Cell::Empty,
        _ => Cell::text(format!("{} → {}", format::date(start), format::date(end))),
    }
}

fn parent_columns() -> Vec<Column<ParentSubscription>> {
    vec![
        Column::new("Parent", |s: &ParentSubscription| Cell::text(s.parent_name.as_deref().unwrap_or(&s.parent_id))),
        Column::new("Plan", |s: &ParentSubscription| Cell::text(s.plan_name.as_deref().unwrap_or(&s.plan_id))),
        Column::new("Period", |s: &ParentSubscription| period(s.start_date.as_deref(), s.end_date.as_deref())),
        Column::new("Amount", |s: &ParentSubscription| {
            s.amount.map_or(Cell::Empty, |a| Cell::text(wire::payments::format_amount(a, "INR")))
        }),
        Column::new("Status", |s: &ParentSubscription| badge(s.status)),
    ]
}

fn school_columns() -> Vec<Column<SchoolSubscription>> {
    vec![
        Column::new("School", |s: &SchoolSubscription| Cell::text(s.school_name.as_deref().unwrap_or(&s.school_id))),
        Column::new("Plan", |s: &SchoolSubscription| Cell::text(s.plan_name.as_deref().unwrap_or(&s.plan_id))),
        Column::new("Seats", |s: &SchoolSubscription| Cell::text(seat_usage(s))),
        Column::new("Period", |s: &SchoolSubscription| period(s.start_date.as_deref(), s.end_date.as_deref())),
        Column::new("Status", |s: &SchoolSubscription| badge(s.status)),
    ]
}

fn code_columns() -> Vec<Column<RedemptionCode>> {
    vec![
        Column::new("Code", |c: &RedemptionCode| Cell::text(&c.code)),
        Column::new("Subscription", |c: &RedemptionCode| Cell::text(&c.school_subscription_id)),
        Column::new("State", |c: &RedemptionCode| {
            if c.is_redeemed { Cell::Badge("Redeemed", Tone::Neutral) } else { Cell::Badge("Available", Tone::Positive) }
        }),
        Column::new("Redeemed by", |c: &RedemptionCode| Cell::opt(c.redeemed_by.as_deref())),
        Column::new("Expires", |c: &RedemptionCode| Cell::text(format::date(c.expires_at.as_deref()))),
    ]
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Subscriptions" allowed=Role::STAFF>
            {parent_section()}
            {school_section()}
            {list_section::<RedemptionCodes>(Table::new(code_columns()))}
        </ConsoleLayout>
    }
}

fn parent_section() -> impl IntoView {
    let (cancel, confirm) = confirmed_action::<ParentSubscription, _, _>(
        "Cancel",
        "Cancel subscription".to_owned(),
        ParentSubscriptions::invalidates,
        resources::cancel_parent_subscription,
    );
    let table = Table::new(parent_columns()).with_actions(vec![cancel.when(is_cancellable)]);
    view! {
        {list_section::<ParentSubscriptions>(table)}
        {confirm}
    }
}

fn school_section() -> impl IntoView {
    let target = RwSignal::new(None::<String>);
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let generate = Mutation::new();

    let open = Callback::new(move |sub: SchoolSubscription| {
        generate.reset();
        errors.set(FieldErrors::new());
        values.set(initial_values(CODE_FIELDS));
        target.set(Some(sub.id));
    });
    let on_submit = Callback::new(move |form: FormValues| {
        let Some(id) = target.get_untracked() else {
            return;
        };
        match code_count(&form) {
            Ok(count) => generate.run(
                SchoolSubscriptions::generate_codes_invalidates(),
                resources::generate_codes(id, count),
                move |_| target.set(None),
            ),
            Err(message) => generate.reject(message),
        }
    });
    let on_cancel = Callback::new(move |()| target.set(None));

    let config = CrudConfig::<SchoolSubscriptions>::new(school_columns(), SCHOOL_FIELDS, to_draft)
        .editable(to_values)
        .actions(vec![RowAction::new("Generate codes", open).when(|s| s.status == SubscriptionStatus::Active)]);

    let dialog = move || {
        target.get().map(|_| {
            view! {
                <FormDialog
                    title="Generate redemption codes".to_owned()
                    fields=CODE_FIELDS
                    values=values
                    errors=errors
                    mutation=generate
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            }
        })
    };

    view! {
        {crud_section(config)}
        {dialog}
    }
}
