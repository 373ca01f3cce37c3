//! Confirmation modal for destructive or irreversible actions.

use leptos::prelude::*;

use super::query_status::MutationError;
use crate::net::query::Mutation;

/// Ask before running `on_confirm`; shows the mutation's error inline and
/// stays open until the caller closes it.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    confirm_label: &'static str,
    mutation: Mutation,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                <p class="dialog__message">{move || message.get()}</p>
                <MutationError mutation=mutation />
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || mutation.pending.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if mutation.pending.get() { "Working..." } else { confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
