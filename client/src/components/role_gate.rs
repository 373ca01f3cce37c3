//! Route guard rendering children only for allowed roles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::auth::{GuardDecision, Role};

use crate::state::auth::AuthState;
use crate::util::auth::install_role_redirect;

fn placeholder(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Pending => "Checking your session...",
        GuardDecision::SignIn => "Redirecting to sign in...",
        GuardDecision::Fallback(_) => "You do not have access to this page.",
        GuardDecision::Allow => "",
    }
}

/// Render `children` only while the session's role is in `allowed`.
///
/// Anything else shows a placeholder and redirects: to `/login` without a
/// valid session, to the dashboard for a valid session lacking the role.
#[component]
pub fn RoleGate(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_redirect(auth, allowed, use_navigate());

    let decision = move || auth.get().decide(allowed);
    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=move || view! { <p class="guard__placeholder">{move || placeholder(decision())}</p> }
        >
            {children()}
        </Show>
    }
}
