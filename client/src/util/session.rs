//! Stored session tokens.
//!
//! The API issues an access token and a refresh token at login. Both live in
//! `localStorage` under fixed keys; the access token is attached to every
//! request as a bearer header. Nothing here refreshes tokens.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::auth::LoginResponse;

use super::storage;

pub const ACCESS_TOKEN_KEY: &str = "transit_admin_token";
pub const REFRESH_TOKEN_KEY: &str = "transit_admin_refresh_token";

/// Current access token, ignoring blank values.
pub fn access_token() -> Option<String> {
    storage::load_raw(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

#[must_use]
pub fn has_token() -> bool {
    access_token().is_some()
}

/// Persist the tokens from a successful login.
///
/// A login response without a refresh token clears any stale one.
pub fn store(login: &LoginResponse) {
    storage::save_raw(ACCESS_TOKEN_KEY, &login.token);
    match login.refresh_token.as_deref() {
        Some(refresh) => storage::save_raw(REFRESH_TOKEN_KEY, refresh),
        None => storage::remove(REFRESH_TOKEN_KEY),
    }
}

/// Forget both tokens.
pub fn clear() {
    storage::remove(ACCESS_TOKEN_KEY);
    storage::remove(REFRESH_TOKEN_KEY);
}
