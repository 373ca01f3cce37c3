//! Generic table renderer driven by column descriptors.
//!
//! DESIGN
//! ======
//! A table is described once per page (`Table<T>`: columns, row actions, an
//! optional detail link) and rendered against a reactive row list. Cells are
//! plain data (`Cell`), so search and tests work on the same values the
//! markup shows. An empty list renders the header and a "No records" row.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use leptos::prelude::*;
use wire::Entity;

use crate::state::ui::UiState;
use crate::util::format::EMPTY;

/// Colour family of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Positive,
    Warning,
    Negative,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge badge--neutral",
            Self::Info => "badge badge--info",
            Self::Positive => "badge badge--positive",
            Self::Warning => "badge badge--warning",
            Self::Negative => "badge badge--negative",
        }
    }
}

/// Rendered content of one table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Badge(&'static str, Tone),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text cell for an optional value; blank strings count as missing.
    #[must_use]
    pub fn opt(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::Text(v.to_owned()),
            _ => Self::Empty,
        }
    }

    /// Text matched by the search box.
    #[must_use]
    pub fn search_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Badge(label, _) => label,
            Self::Empty => "",
        }
    }
}

/// Column header plus the function that renders a row's cell.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> Cell,
}

impl<T> Column<T> {
    pub const fn new(header: &'static str, cell: fn(&T) -> Cell) -> Self {
        Self { header, cell }
    }
}

/// Button shown on rows that pass `visible`.
pub struct RowAction<T: 'static> {
    pub label: &'static str,
    pub danger: bool,
    pub visible: fn(&T) -> bool,
    pub run: Callback<T>,
}

impl<T: 'static> RowAction<T> {
    pub fn new(label: &'static str, run: Callback<T>) -> Self {
        Self { label, danger: false, visible: |_| true, run }
    }

    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    #[must_use]
    pub fn when(mut self, visible: fn(&T) -> bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Full description of a table.
pub struct Table<T: 'static> {
    pub columns: Vec<Column<T>>,
    pub actions: Vec<RowAction<T>>,
    pub detail_href: Option<fn(&T) -> String>,
}

impl<T: 'static> Table<T> {
    #[must_use]
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self { columns, actions: Vec::new(), detail_href: None }
    }

    #[must_use]
    pub fn with_actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn with_detail(mut self, href: fn(&T) -> String) -> Self {
        self.detail_href = Some(href);
        self
    }

    fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.detail_href.is_some()) + usize::from(!self.actions.is_empty())
    }
}

/// Rows with any cell containing `query`, case-insensitive; blank matches all.
#[must_use]
pub fn filter_rows<T: Clone>(columns: &[Column<T>], rows: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|column| (column.cell)(row).search_text().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Summary line under the search box.
#[must_use]
pub fn count_label(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "record" } else { "records" };
    if shown == total {
        format!("{total} {noun}")
    } else {
        format!("{shown} of {total} {noun}")
    }
}

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Badge(label, tone) => view! {
            <td>
                <span class=tone.class()>{label}</span>
            </td>
        }
        .into_any(),
        Cell::Empty => view! { <td class="data-table__muted">{EMPTY}</td> }.into_any(),
    }
}

fn render_row<T>(table: &Table<T>, row: T) -> AnyView
where
    T: Entity + Clone + Send + Sync + 'static,
{
    let cells = table.columns.iter().map(|column| render_cell((column.cell)(&row))).collect_view();
    let link = table.detail_href.map(|href| {
        let href = href(&row);
        view! {
            <td class="data-table__link">
                <a href=href>"View"</a>
            </td>
        }
    });
    let actions = (!table.actions.is_empty()).then(|| {
        let buttons = table
            .actions
            .iter()
            .filter(|action| (action.visible)(&row))
            .map(|action| {
                let run = action.run;
                let target = row.clone();
                let class = if action.danger { "btn btn--small btn--danger" } else { "btn btn--small" };
                view! {
                    <button class=class on:click=move |_| run.run(target.clone())>
                        {action.label}
                    </button>
                }
            })
            .collect_view();
        view! { <td class="data-table__actions">{buttons}</td> }
    });
    let key = row.id().to_owned();
    view! {
        <tr data-id=key>
            {cells}
            {link}
            {actions}
        </tr>
    }
    .into_any()
}

/// Render `table` over `rows` with a search box and empty state.
pub fn data_table<T>(table: Arc<Table<T>>, rows: Signal<Vec<T>>) -> impl IntoView
where
    T: Entity + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(String::new());
    let ui = use_context::<RwSignal<UiState>>();
    let table_class = move || {
        if ui.is_some_and(|ui| ui.get().dense_tables) { "data-table data-table--dense" } else { "data-table" }
    };

    let headers = table.columns.iter().map(|column| view! { <th>{column.header}</th> }).collect_view();
    let link_header = table.detail_href.is_some().then(|| view! { <th></th> });
    let action_header = (!table.actions.is_empty()).then(|| view! { <th>"Actions"</th> });
    let colspan = table.column_count().to_string();

    let count_table = Arc::clone(&table);
    let count = move || {
        let all = rows.get();
        let shown = filter_rows(&count_table.columns, &all, &query.get()).len();
        count_label(shown, all.len())
    };

    let body = move || {
        let visible = filter_rows(&table.columns, &rows.get(), &query.get());
        if visible.is_empty() {
            let colspan = colspan.clone();
            return view! {
                <tr class="data-table__empty">
                    <td colspan=colspan>"No records"</td>
                </tr>
            }
            .into_any();
        }
        visible.into_iter().map(|row| render_row(&table, row)).collect_view().into_any()
    };

    view! {
        <div class="data-table__wrap">
            <div class="data-table__toolbar">
                <input
                    class="data-table__search"
                    type="search"
                    placeholder="Search"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="data-table__count">{count}</span>
            </div>
            <table class=table_class>
                <thead>
                    <tr>
                        {headers}
                        {link_header}
                        {action_header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
