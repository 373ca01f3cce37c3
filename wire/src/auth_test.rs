use super::*;

fn verified(role: Role) -> Option<TokenVerification> {
    Some(TokenVerification { role, token_valid: true })
}

#[test]
fn decide_is_pending_while_loading() {
    assert_eq!(decide(true, verified(Role::SuperAdmin), Role::ALL), GuardDecision::Pending);
    assert_eq!(decide(true, None, Role::ALL), GuardDecision::Pending);
}

#[test]
fn decide_sends_missing_session_to_sign_in() {
    assert_eq!(decide(false, None, Role::ALL), GuardDecision::SignIn);
}

#[test]
fn decide_sends_invalid_token_to_sign_in() {
    let verification = Some(TokenVerification { role: Role::Admin, token_valid: false });
    assert_eq!(decide(false, verification, Role::ALL), GuardDecision::SignIn);
}

#[test]
fn decide_never_allows_unknown_role() {
    assert_eq!(decide(false, verified(Role::Unknown), &[Role::Unknown]), GuardDecision::SignIn);
}

#[test]
fn decide_allows_listed_role() {
    assert_eq!(decide(false, verified(Role::SchoolAdmin), Role::SCHOOL), GuardDecision::Allow);
}

#[test]
fn decide_redirects_unlisted_role_to_landing() {
    assert_eq!(
        decide(false, verified(Role::Support), Role::SUPER),
        GuardDecision::Fallback(DEFAULT_LANDING)
    );
}

#[test]
fn every_role_outside_super_is_rejected_from_super_pages() {
    for role in Role::ALL.iter().copied().filter(|r| *r != Role::SuperAdmin) {
        assert_ne!(decide(false, verified(role), Role::SUPER), GuardDecision::Allow, "{role:?}");
    }
}

#[test]
fn verification_parses_camel_case_payload() {
    let parsed: TokenVerification =
        serde_json::from_str(r#"{"role":"school_admin","tokenValid":true}"#).expect("parse");
    assert_eq!(parsed, TokenVerification { role: Role::SchoolAdmin, token_valid: true });
}

#[test]
fn verification_tolerates_unknown_role_string() {
    let parsed: TokenVerification =
        serde_json::from_str(r#"{"role":"driver","tokenValid":true}"#).expect("parse");
    assert_eq!(parsed.role, Role::Unknown);
}

#[test]
fn role_parse_matches_wire_values() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), *role);
    }
    assert_eq!(Role::parse("root"), Role::Unknown);
}

#[test]
fn login_response_accepts_missing_refresh_token() {
    let parsed: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).expect("parse");
    assert_eq!(parsed.token, "abc");
    assert!(parsed.refresh_token.is_none());
    assert!(parsed.admin.is_none());
}
