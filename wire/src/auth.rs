//! Session roles, login payloads, and the route-guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API owns sessions. The console only stores the tokens it is handed at
//! login and asks `/admin/verify-admin-token` which role the token carries.
//! Every protected page declares an allow-list of roles and feeds the
//! verification result through [`decide`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::models::Admin;

/// Role attached to an admin session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    SchoolAdmin,
    Support,
    /// Any role string this console does not know. Never authorized.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Every role the console can grant access to.
    pub const ALL: &'static [Role] = &[Role::SuperAdmin, Role::Admin, Role::SchoolAdmin, Role::Support];
    /// Roles allowed to manage other admins and role definitions.
    pub const SUPER: &'static [Role] = &[Role::SuperAdmin];
    /// Roles allowed to manage platform-wide records.
    pub const STAFF: &'static [Role] = &[Role::SuperAdmin, Role::Admin];
    /// Roles allowed to manage schools and their students.
    pub const SCHOOL: &'static [Role] = &[Role::SuperAdmin, Role::Admin, Role::SchoolAdmin];
    /// Roles allowed to read operational data for support work.
    pub const OPERATIONS: &'static [Role] = &[Role::SuperAdmin, Role::Admin, Role::Support];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::SchoolAdmin => "School Admin",
            Self::Support => "Support",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire value used in forms and request payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::SchoolAdmin => "school_admin",
            Self::Support => "support",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire value; unrecognized strings map to [`Role::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "super_admin" => Self::SuperAdmin,
            "admin" => Self::Admin,
            "school_admin" => Self::SchoolAdmin,
            "support" => Self::Support,
            _ => Self::Unknown,
        }
    }
}

/// `POST /admin/login` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /admin/login` response data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub admin: Option<Admin>,
}

/// `GET /admin/verify-admin-token` response data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenVerification {
    pub role: Role,
    pub token_valid: bool,
}

/// Outcome of checking a session against a page's allow-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verification has not finished yet; render nothing protected.
    Pending,
    /// The session may see the page.
    Allow,
    /// No usable session; go to the sign-in page.
    SignIn,
    /// Valid session without the required role; go to the given path.
    Fallback(&'static str),
}

/// Path a signed-in user lands on when a page rejects their role.
pub const DEFAULT_LANDING: &str = "/";

/// Sign-in route.
pub const SIGN_IN: &str = "/login";

/// Decide whether a session may render a page guarded by `allowed`.
///
/// `loading` is true while verification is in flight. `verification` is
/// `None` when there is no stored token or the verify call failed.
#[must_use]
pub fn decide(loading: bool, verification: Option<TokenVerification>, allowed: &[Role]) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    let Some(verification) = verification else {
        return GuardDecision::SignIn;
    };
    if !verification.token_valid || verification.role == Role::Unknown {
        return GuardDecision::SignIn;
    }
    if allowed.contains(&verification.role) {
        GuardDecision::Allow
    } else {
        GuardDecision::Fallback(DEFAULT_LANDING)
    }
}
