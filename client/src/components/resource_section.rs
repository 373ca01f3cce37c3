//! Generic list, CRUD and detail sections for catalog resources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Most screens are the same composition: a cached list query, a table, and
//! a form dialog whose submit runs a create/update mutation that invalidates
//! the resource's tags. Pages describe their columns, fields and draft
//! conversion in a `CrudConfig` and get the whole flow from `crud_section`.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use wire::{ApiError, Deletable, Entity, Envelope, Mutable, Resource, Tag};

use super::confirm_dialog::ConfirmDialog;
use super::data_table::{Cell, Column, RowAction, Table, data_table};
use super::form_dialog::{DialogMode, FormDialog};
use super::query_status::query_banner;
use crate::net::query::{Mutation, QueryState, use_detail, use_list};
use crate::net::resources;
use crate::util::form::{FieldErrors, FieldSpec, FormValues, initial_values};
use crate::util::format::EMPTY;

/// Rows of a list query, empty until it is ready.
pub fn ready_rows<T>(state: RwSignal<QueryState<Vec<T>>>) -> Signal<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.ready().cloned().unwrap_or_default()))
}

/// Everything `crud_section` needs to know about a resource's screen.
pub struct CrudConfig<R: Mutable> {
    pub columns: Vec<Column<R::Item>>,
    pub fields: &'static [FieldSpec],
    /// Fields for the edit dialog when they differ from the create dialog.
    pub edit_fields: Option<&'static [FieldSpec]>,
    pub to_draft: fn(&FormValues) -> Result<R::Draft, String>,
    /// Prefill for the edit dialog; `None` disables editing.
    pub to_values: Option<fn(&R::Item) -> FormValues>,
    pub detail_href: Option<fn(&R::Item) -> String>,
    pub extra_actions: Vec<RowAction<R::Item>>,
    /// Tags a create/update makes stale; defaults to `R::invalidates()`.
    pub invalidates: Option<fn() -> Vec<Tag>>,
}

impl<R: Mutable> CrudConfig<R> {
    pub fn new(
        columns: Vec<Column<R::Item>>,
        fields: &'static [FieldSpec],
        to_draft: fn(&FormValues) -> Result<R::Draft, String>,
    ) -> Self {
        Self {
            columns,
            fields,
            edit_fields: None,
            to_draft,
            to_values: None,
            detail_href: None,
            extra_actions: Vec::new(),
            invalidates: None,
        }
    }

    #[must_use]
    pub fn editable(mut self, to_values: fn(&R::Item) -> FormValues) -> Self {
        self.to_values = Some(to_values);
        self
    }

    #[must_use]
    pub fn edit_fields(mut self, fields: &'static [FieldSpec]) -> Self {
        self.edit_fields = Some(fields);
        self
    }

    #[must_use]
    pub fn detail(mut self, href: fn(&R::Item) -> String) -> Self {
        self.detail_href = Some(href);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: Vec<RowAction<R::Item>>) -> Self {
        self.extra_actions = actions;
        self
    }

    #[must_use]
    pub fn invalidates(mut self, tags: fn() -> Vec<Tag>) -> Self {
        self.invalidates = Some(tags);
        self
    }
}

fn section_header(title: &'static str, create: Option<(String, Callback<()>)>) -> impl IntoView {
    let button = create.map(|(label, on_create)| {
        view! {
            <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                {label}
            </button>
        }
    });
    view! {
        <div class="section__header">
            <h2 class="section__title">{title}</h2>
            {button}
        </div>
    }
}

/// Read-only list of `R` rendered through `table`.
pub fn list_section<R: Resource>(table: Table<R::Item>) -> impl IntoView {
    let state = use_list::<R>();
    view! {
        <section class="section">
            {section_header(R::PLURAL, None)}
            {query_banner(state)}
            {data_table(Arc::new(table), ready_rows(state))}
        </section>
    }
}

/// List with create, edit and delete for `R`.
pub fn crud_section<R>(config: CrudConfig<R>) -> impl IntoView
where
    R: Mutable + Deletable,
{
    let state = use_list::<R>();
    let mode = RwSignal::new(DialogMode::Closed);
    let values = RwSignal::new(FormValues::new());
    let errors = RwSignal::new(FieldErrors::new());
    let save = Mutation::new();

    let create_fields = config.fields;
    let edit_fields = config.edit_fields.unwrap_or(config.fields);
    let to_draft = config.to_draft;
    let invalidates = config.invalidates.unwrap_or(R::invalidates);

    let open_create = Callback::new(move |()| {
        save.reset();
        errors.set(FieldErrors::new());
        values.set(initial_values(create_fields));
        mode.set(DialogMode::Create);
    });

    let mut actions = Vec::new();
    if let Some(to_values) = config.to_values {
        actions.push(RowAction::new(
            "Edit",
            Callback::new(move |row: R::Item| {
                save.reset();
                errors.set(FieldErrors::new());
                values.set(to_values(&row));
                mode.set(DialogMode::Edit(row.id().to_owned()));
            }),
        ));
    }
    actions.extend(config.extra_actions);
    let (delete_action, confirm) = confirmed_action::<R::Item, _, _>(
        "Delete",
        format!("Delete {}", R::SINGULAR.to_lowercase()),
        R::invalidates,
        resources::delete::<R>,
    );
    actions.push(delete_action);

    let mut table = Table::new(config.columns).with_actions(actions);
    if let Some(href) = config.detail_href {
        table = table.with_detail(href);
    }

    let on_submit = Callback::new(move |form: FormValues| match to_draft(&form) {
        Ok(draft) => {
            let id = mode.get_untracked().edit_id();
            save.run(invalidates(), resources::save::<R>(id, draft), move |_| mode.set(DialogMode::Closed));
        }
        Err(message) => save.reject(message),
    });
    let on_cancel = Callback::new(move |()| mode.set(DialogMode::Closed));

    let dialog = move || {
        let current = mode.get();
        current.is_open().then(|| {
            let fields = if matches!(current, DialogMode::Edit(_)) { edit_fields } else { create_fields };
            view! {
                <FormDialog
                    title=current.title(R::SINGULAR)
                    fields=fields
                    values=values
                    errors=errors
                    mutation=save
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            }
        })
    };

    let create_label = format!("New {}", R::SINGULAR.to_lowercase());
    view! {
        <section class="section">
            {section_header(R::PLURAL, Some((create_label, open_create)))}
            {query_banner(state)}
            {data_table(Arc::new(table), ready_rows(state))}
            {dialog}
            {confirm}
        </section>
    }
}

/// Labelled fields of one `R` record loaded from its detail route.
pub fn detail_section<R, I>(id: I, fields: Vec<Column<R::Item>>) -> impl IntoView
where
    R: Resource,
    I: Fn() -> Option<String> + Send + Sync + 'static,
{
    let state = use_detail::<R, I>(id);
    let fields = Arc::new(fields);
    let body = move || {
        state.with(|s| {
            s.ready().map(|item| {
                fields
                    .iter()
                    .map(|field| {
                        let value = match (field.cell)(item) {
                            Cell::Empty => EMPTY.to_owned(),
                            cell => cell.search_text().to_owned(),
                        };
                        view! {
                            <div class="detail__row">
                                <dt>{field.header}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()
            })
        })
    };
    view! {
        <section class="section section--detail">
            {section_header(R::SINGULAR, None)}
            {query_banner(state)}
            <dl class="detail">{body}</dl>
        </section>
    }
}

/// Danger row action that asks for confirmation, then calls `request` with
/// the row id and invalidates `tags` on success.
///
/// Returns the action and the confirmation dialog to mount next to the table.
pub fn confirmed_action<T, F, Fut>(
    label: &'static str,
    title: String,
    tags: fn() -> Vec<Tag>,
    request: F,
) -> (RowAction<T>, impl IntoView)
where
    T: Entity + Clone + Send + Sync + 'static,
    F: Fn(String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Envelope, ApiError>> + 'static,
{
    let mutation = Mutation::new();
    let pending = RwSignal::new(None::<String>);

    let action = RowAction::new(
        label,
        Callback::new(move |row: T| {
            mutation.reset();
            pending.set(Some(row.id().to_owned()));
        }),
    )
    .danger();

    let on_confirm = Callback::new(move |()| {
        if let Some(id) = pending.get_untracked() {
            mutation.run(tags(), request(id), move |_| pending.set(None));
        }
    });
    let on_cancel = Callback::new(move |()| pending.set(None));

    let dialog = move || {
        pending.get().map(|id| {
            let message = format!("{title} {id}? This cannot be undone.");
            view! {
                <ConfirmDialog
                    title=title.clone()
                    message=message
                    confirm_label=label
                    mutation=mutation
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            }
        })
    };
    (action, dialog)
}
