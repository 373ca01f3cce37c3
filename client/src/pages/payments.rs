//! Payment ledger, refunds, and manual gateway reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Payments are recorded by the upstream API when a Razorpay checkout
//! completes; the console never edits them. Staff can refund a settled
//! payment (fully, or partially by typing a rupee amount), open an order by
//! hand for an offline sale, and confirm a checkout whose callback never
//! reached the API by pasting the gateway ids and signature.
//!
//! Rupee amounts typed here are converted to integer paise before they are
//! sent; the gateway rejects fractional amounts.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::auth::Role;
use wire::models::Payment;
use wire::payments::{CreateOrder, Refund, RefundRequest, VerifyPayment, format_amount, to_paise};
use wire::resources::Payments;
use wire::{Resource, Tag};

use crate::components::console_layout::ConsoleLayout;
use crate::components::data_table::{Cell, Column, RowAction, Table, data_table};
use crate::components::form_dialog::FormDialog;
use crate::components::query_status::query_banner;
use crate::components::resource_section::{detail_section, ready_rows};
use crate::components::status_badge::badge;
use crate::net::api;
use crate::net::query::{Mutation, use_list};
use crate::util::form::{FieldErrors, FieldSpec, FormValues, initial_values, optional, parse_f64, text};
use crate::util::format;

const REFUND_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("amount", "Amount to refund (leave blank for full refund)"),
    FieldSpec::textarea("reason", "Reason"),
];

const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("amount", "Amount (INR)").required(),
    FieldSpec::text("receipt", "Receipt").required(),
    FieldSpec::text("subscriptionId", "Subscription ID"),
];

const VERIFY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("orderId", "Order ID").required(),
    FieldSpec::text("paymentId", "Payment ID").required(),
    FieldSpec::text("signature", "Signature").required(),
];

/// Which payment dialog is open.
#[derive(Clone, Debug, Default, PartialEq)]
enum PaymentDialog {
    #[default]
    Closed,
    Refund(Payment),
    CreateOrder,
    VerifyPayment,
}

impl PaymentDialog {
    fn title(&self) -> String {
        match self {
            Self::Refund(payment) => format!("Refund {}", format_amount(payment.amount, &payment.currency)),
            Self::CreateOrder => "Create gateway order".to_owned(),
            Self::VerifyPayment => "Verify gateway payment".to_owned(),
            Self::Closed => String::new(),
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Refund(_) => REFUND_FIELDS,
            Self::CreateOrder => ORDER_FIELDS,
            Self::VerifyPayment | Self::Closed => VERIFY_FIELDS,
        }
    }
}

/// Rupees in `name` as paise; blank is `None`.
fn rupees_to_paise(values: &FormValues, name: &str, label: &str) -> Result<Option<u64>, String> {
    if optional(values, name).is_none() {
        return Ok(None);
    }
    let rupees = parse_f64(values, name, label)?;
    to_paise(rupees).map(Some).ok_or_else(|| format!("{label} must be a number"))
}

pub(crate) fn refund_request(payment: &Payment, values: &FormValues) -> Result<RefundRequest, String> {
    let amount = rupees_to_paise(values, "amount", "Amount")?;
    let paid = to_paise(payment.amount).unwrap_or(0);
    match amount {
        Some(0) => return Err("Amount must be greater than zero".to_owned()),
        Some(paise) if paise > paid => {
            return Err(format!("Amount cannot exceed {}", format_amount(payment.amount, &payment.currency)));
        }
        _ => {}
    }
    Ok(RefundRequest { payment_id: payment.id.clone(), amount, reason: optional(values, "reason") })
}

pub(crate) fn order_request(values: &FormValues) -> Result<CreateOrder, String> {
    let amount = rupees_to_paise(values, "amount", "Amount")?.unwrap_or(0);
    if amount == 0 {
        return Err("Amount must be greater than zero".to_owned());
    }
    Ok(CreateOrder {
        amount,
        currency: "INR".to_owned(),
        receipt: text(values, "receipt"),
        subscription_id: optional(values, "subscriptionId"),
    })
}

pub(crate) fn verify_request(values: &FormValues) -> VerifyPayment {
    VerifyPayment {
        razorpay_order_id: text(values, "orderId"),
        razorpay_payment_id: text(values, "paymentId"),
        razorpay_signature: text(values, "signature"),
    }
}

/// Paise shown as rupees.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn paise_label(paise: u64, currency: &str) -> String {
    format_amount(paise as f64 / 100.0, currency)
}

/// Confirmation shown after a refund, in the refunded payment's currency.
pub(crate) fn refund_notice(refund: Option<&Refund>, currency: &str) -> String {
    refund.map_or_else(
        || "Refund requested".to_owned(),
        |refund| format!("Refund {} issued for {}", refund.id, paise_label(refund.amount, currency)),
    )
}

fn payer(payment: &Payment) -> Cell {
    match (payment.payer_name.as_deref(), payment.payer_type.as_deref()) {
        (Some(name), Some(kind)) => Cell::text(format!("{name} ({kind})")),
        (name, _) => Cell::opt(name),
    }
}

fn columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("Payer", payer),
        Column::new("Amount", |p: &Payment| Cell::text(format_amount(p.amount, &p.currency))),
        Column::new("Gateway payment", |p: &Payment| Cell::opt(p.razorpay_payment_id.as_deref())),
        Column::new("Date", |p: &Payment| Cell::text(format::date_time(p.created_at.as_deref()))),
        Column::new("Status", |p: &Payment| badge(p.status)),
    ]
}

fn detail_fields() -> Vec<Column<Payment>> {
    vec![
        Column::new("Payer", payer),
        Column::new("Amount", |p: &Payment| Cell::text(format_amount(p.amount, &p.currency))),
        Column::new("Status", |p: &Payment| badge(p.status)),
        Column::new("Gateway order", |p: &Payment| Cell::opt(p.razorpay_order_id.as_deref())),
        Column::new("Gateway payment", |p: &Payment| Cell::opt(p.razorpay_payment_id.as_deref())),
        Column::new("Date", |p: &Payment| Cell::text(format::date_time(p.created_at.as_deref()))),
    ]
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Payments" allowed=Role::STAFF>
            {payments_section()}
        </ConsoleLayout>
    }
}

fn payments_section() -> impl IntoView {
    let state = use_list::<Payments>();
    let dialog = RwSignal::new(PaymentDialog::Closed);
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(None::<String>);
    let write = Mutation::new();

    let open = move |next: PaymentDialog| {
        write.reset();
        errors.set(FieldErrors::new());
        values.set(initial_values(next.fields()));
        dialog.set(next);
    };
    let open_refund = Callback::new(move |payment: Payment| open(PaymentDialog::Refund(payment)));
    let close = Callback::new(move |()| dialog.set(PaymentDialog::Closed));

    let on_submit = Callback::new(move |form: FormValues| match dialog.get_untracked() {
        PaymentDialog::Refund(payment) => match refund_request(&payment, &form) {
            Ok(request) => {
                let currency = payment.currency.clone();
                write.run(Payments::refund_invalidates(), api::refund(request), move |envelope| {
                    notice.set(Some(refund_notice(api::refund_record(&envelope).as_ref(), &currency)));
                    dialog.set(PaymentDialog::Closed);
                });
            }
            Err(message) => write.reject(message),
        },
        PaymentDialog::CreateOrder => match order_request(&form) {
            Ok(order) => write.run(vec![Tag::Payment], api::create_order(order), move |envelope| {
                let message = api::order_record(&envelope).map_or_else(
                    || "Order created".to_owned(),
                    |order| format!("Order {} opened for {}", order.id, paise_label(order.amount, &order.currency)),
                );
                notice.set(Some(message));
                dialog.set(PaymentDialog::Closed);
            }),
            Err(message) => write.reject(message),
        },
        PaymentDialog::VerifyPayment => {
            write.run(Payments::refund_invalidates(), api::verify_payment(verify_request(&form)), move |_| {
                notice.set(Some("Payment verified".to_owned()));
                dialog.set(PaymentDialog::Closed);
            });
        }
        PaymentDialog::Closed => {}
    });

    let table = Table::new(columns())
        .with_actions(vec![RowAction::new("Refund", open_refund).danger().when(Payment::is_refundable)])
        .with_detail(|p| format!("/payments/{}", p.id));

    let form = move || {
        let current = dialog.get();
        (current != PaymentDialog::Closed).then(|| {
            view! {
                <FormDialog
                    title=current.title()
                    fields=current.fields()
                    values=values
                    errors=errors
                    mutation=write
                    on_submit=on_submit
                    on_cancel=close
                />
            }
        })
    };

    view! {
        <section class="section">
            <div class="section__header">
                <h2 class="section__title">{Payments::PLURAL}</h2>
                <button class="btn" on:click=move |_| open(PaymentDialog::CreateOrder)>"Create order"</button>
                <button class="btn" on:click=move |_| open(PaymentDialog::VerifyPayment)>"Verify payment"</button>
            </div>
            {move || notice.get().map(|message| view! { <p class="notice notice--success" role="status">{message}</p> })}
            {query_banner(state)}
            {data_table(Arc::new(table), ready_rows(state))}
            {form}
        </section>
    }
}

#[component]
pub fn PaymentDetailPage() -> impl IntoView {
    view! {
        <ConsoleLayout title="Payment" allowed=Role::STAFF>
            {payment_detail()}
        </ConsoleLayout>
    }
}

fn payment_detail() -> impl IntoView {
    let params = use_params_map();
    view! {
        <a class="section__back" href="/payments">"← All payments"</a>
        {detail_section::<Payments, _>(move || params.with(|p| p.get("id")), detail_fields())}
    }
}
