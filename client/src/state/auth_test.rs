use super::*;

fn session(role: Role, token_valid: bool) -> AuthState {
    AuthState::verified(TokenVerification { role, token_valid })
}

#[test]
fn default_state_is_pending() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.decide(Role::ALL), GuardDecision::Pending);
}

#[test]
fn signed_out_goes_to_sign_in() {
    assert_eq!(AuthState::signed_out().decide(Role::ALL), GuardDecision::SignIn);
}

#[test]
fn allowed_role_renders_page() {
    assert_eq!(session(Role::Admin, true).decide(Role::STAFF), GuardDecision::Allow);
}

#[test]
fn school_admin_cannot_open_super_admin_pages() {
    assert_eq!(session(Role::SchoolAdmin, true).decide(Role::SUPER), GuardDecision::Fallback("/"));
}

#[test]
fn invalid_token_has_no_role() {
    let state = session(Role::SuperAdmin, false);
    assert_eq!(state.role(), None);
    assert_eq!(state.decide(Role::SUPER), GuardDecision::SignIn);
}

#[test]
fn valid_token_exposes_role() {
    assert_eq!(session(Role::Support, true).role(), Some(Role::Support));
}
