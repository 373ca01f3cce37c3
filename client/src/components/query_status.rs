//! Inline loading/error banners for queries and mutations.

use leptos::prelude::*;

use crate::net::query::{Mutation, QueryState, status_message};

/// Loading line or visible error for a query; renders nothing once ready.
pub fn query_banner<T>(state: RwSignal<QueryState<T>>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    move || {
        state.with(|s| {
            let failed = s.error().is_some();
            status_message(s).map(|message| {
                let class = if failed { "notice notice--error" } else { "notice notice--muted" };
                let role = failed.then_some("alert");
                view! { <p class=class role=role>{message}</p> }
            })
        })
    }
}

/// Error line for the last failed write of `mutation`.
#[component]
pub fn MutationError(mutation: Mutation) -> impl IntoView {
    view! {
        <Show when=move || mutation.error.with(Option::is_some)>
            <p class="notice notice--error" role="alert">
                {move || mutation.error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
