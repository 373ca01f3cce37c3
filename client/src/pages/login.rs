//! Email + password sign-in for console operators.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_signed_in_redirect(auth, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(err) = crate::net::api::login_payload(&email_value, &password_value) {
            info.set(err.to_string());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(login) => {
                    crate::util::session::store(&login);
                    let _ = password.try_set(String::new());
                    let _ = info.try_set(String::new());
                    crate::util::auth::verify_session(auth);
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    let _ = info.try_set(crate::net::api::login_rejected_message(&err));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Transit Admin"</h1>
                <p class="login-card__subtitle">"Sign in to the operations console"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="status">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
