//! Verified session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the session check in `util::auth` and read by every role gate.
//! The stored tokens themselves live in `localStorage` (`util::session`);
//! this only records what the API said about them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::auth::{self, GuardDecision, Role, TokenVerification};

/// Result of the most recent token verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub verification: Option<TokenVerification>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::verifying()
    }
}

impl AuthState {
    /// Verification has been requested but not answered.
    #[must_use]
    pub fn verifying() -> Self {
        Self { verification: None, loading: true }
    }

    /// No session: never verified, rejected, or logged out.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { verification: None, loading: false }
    }

    #[must_use]
    pub fn verified(verification: TokenVerification) -> Self {
        Self { verification: Some(verification), loading: false }
    }

    /// Role of a valid session, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.verification.filter(|v| v.token_valid).map(|v| v.role)
    }

    /// Guard outcome for a page restricted to `allowed`.
    #[must_use]
    pub fn decide(&self, allowed: &[Role]) -> GuardDecision {
        auth::decide(self.loading, self.verification, allowed)
    }
}
