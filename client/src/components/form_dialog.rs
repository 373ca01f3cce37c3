//! Modal form bound to a create or update mutation.
//!
//! DESIGN
//! ======
//! The dialog owns no data. Values and per-field errors live in signals the
//! page provides, so the page can prefill an edit and keep the form intact
//! while the request is pending. Client-side validation runs on submit; only
//! a clean form reaches `on_submit`. API failures surface through the
//! mutation's error line and leave the dialog open for a retry.

#[cfg(test)]
#[path = "form_dialog_test.rs"]
mod form_dialog_test;

use leptos::prelude::*;

use super::query_status::MutationError;
use crate::net::query::Mutation;
use crate::util::form::{FieldErrors, FieldKind, FieldSpec, FormValues, flag_value, validate};

/// Which record, if any, a page's dialog is editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

impl DialogMode {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn edit_id(&self) -> Option<String> {
        match self {
            Self::Edit(id) => Some(id.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn title(&self, singular: &str) -> String {
        match self {
            Self::Edit(_) => format!("Edit {}", singular.to_lowercase()),
            _ => format!("New {}", singular.to_lowercase()),
        }
    }
}

fn field_value(values: RwSignal<FormValues>, name: &'static str) -> String {
    values.with(|v| v.get(name).cloned().unwrap_or_default())
}

fn set_field(values: RwSignal<FormValues>, name: &'static str, value: String) {
    values.update(|v| {
        v.insert(name.to_owned(), value);
    });
}

fn render_input(field: FieldSpec, values: RwSignal<FormValues>) -> AnyView {
    let name = field.name;
    match field.kind {
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                name=name
                prop:checked=move || field_value(values, name) == "true"
                on:change=move |ev| set_field(values, name, flag_value(event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldKind::Select(options) => {
            let options = options
                .iter()
                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                .collect_view();
            view! {
                <select
                    class="field__input"
                    name=name
                    prop:value=move || field_value(values, name)
                    on:change=move |ev| set_field(values, name, event_target_value(&ev))
                >
                    {options}
                </select>
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <textarea
                class="field__input field__input--multiline"
                name=name
                prop:value=move || field_value(values, name)
                on:input=move |ev| set_field(values, name, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                class="field__input"
                type=kind.input_type()
                name=name
                step=(kind == FieldKind::Number).then_some("any")
                prop:value=move || field_value(values, name)
                on:input=move |ev| set_field(values, name, event_target_value(&ev))
            />
        }
        .into_any(),
    }
}

fn render_field(field: FieldSpec, values: RwSignal<FormValues>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let name = field.name;
    let error = move || errors.with(|e| e.get(name).cloned());
    let class = if field.kind == FieldKind::Checkbox { "field field--inline" } else { "field" };
    view! {
        <label class=class>
            <span class="field__label">
                {field.label}
                {field.required.then_some(" *")}
            </span>
            {render_input(field, values)}
            {move || error().map(|message| view! { <span class="field__error">{message}</span> })}
        </label>
    }
}

/// Validate `values`, store the errors, and report whether the form may be sent.
pub(crate) fn check_form(fields: &[FieldSpec], values: &FormValues, errors: RwSignal<FieldErrors>) -> bool {
    let found = validate(fields, values);
    let clean = found.is_empty();
    errors.set(found);
    clean
}

/// Modal form over `fields`.
#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    fields: &'static [FieldSpec],
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    mutation: Mutation,
    on_submit: Callback<FormValues>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if mutation.pending.get_untracked() {
            return;
        }
        let current = values.get_untracked();
        if check_form(fields, &current, errors) {
            on_submit.run(current);
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    let inputs = fields.iter().map(|field| render_field(*field, values, errors)).collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--form"
                role="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{move || title.get()}</h2>
                <form class="dialog__form" on:submit=on_form_submit novalidate=true>
                    {inputs}
                    <MutationError mutation=mutation />
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || mutation.pending.get()>
                            {move || if mutation.pending.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
