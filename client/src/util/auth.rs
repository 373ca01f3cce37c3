//! Session verification, guard redirects and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies identical redirect behavior: pending sessions render
//! nothing, missing or invalid sessions go to `/login`, and valid sessions
//! without an allowed role go back to the dashboard.
//!
//! ERROR HANDLING
//! ==============
//! A failed verification ends the check for this page load; the session is
//! treated as signed out and nothing is retried. Tokens are only discarded
//! when the API actually rejected them, so a network blip does not log the
//! operator out of the next page load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use wire::auth::{GuardDecision, Role, SIGN_IN, TokenVerification};
use wire::ApiError;

use crate::net::cache::QueryCache;
use crate::state::auth::AuthState;

/// Where a guard decision sends the browser, if anywhere.
#[must_use]
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Pending | GuardDecision::Allow => None,
        GuardDecision::SignIn => Some(SIGN_IN),
        GuardDecision::Fallback(path) => Some(path),
    }
}

/// Auth state after a verification attempt, and whether to drop the tokens.
pub(crate) fn settle(result: Result<TokenVerification, ApiError>) -> (AuthState, bool) {
    match result {
        Ok(verification) if verification.token_valid => (AuthState::verified(verification), false),
        Ok(_) => (AuthState::signed_out(), true),
        Err(err) => (AuthState::signed_out(), err.is_unauthorized()),
    }
}

/// Ask the API which role the stored token carries and record the answer.
pub fn verify_session(auth: RwSignal<AuthState>) {
    if !super::session::has_token() {
        auth.set(AuthState::signed_out());
        return;
    }
    auth.set(AuthState::verifying());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::verify_token().await;
        if let Err(err) = &result {
            log::warn!("session verification failed: {err}");
        }
        let (state, drop_tokens) = settle(result);
        if drop_tokens {
            super::session::clear();
        }
        let _ = auth.try_set(state);
    });
}

/// Verify the stored session once, after hydration.
pub fn install_session_check(auth: RwSignal<AuthState>) {
    Effect::new(move || verify_session(auth));
}

/// Navigate away whenever the session may not see a page guarded by `allowed`.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(auth.get().decide(allowed)) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Send a signed-in visitor of the login page to the dashboard.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if auth.get().decide(Role::ALL) == GuardDecision::Allow {
            navigate(wire::auth::DEFAULT_LANDING, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Clear tokens, cached data and auth state, then go to the sign-in page.
pub fn sign_out<F>(auth: RwSignal<AuthState>, cache: RwSignal<QueryCache>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    super::session::clear();
    cache.update(QueryCache::clear);
    auth.set(AuthState::signed_out());
    navigate(SIGN_IN, NavigateOptions::default());
}
