use super::*;

#[test]
fn pending_and_allowed_sessions_stay_put() {
    assert_eq!(redirect_target(GuardDecision::Pending), None);
    assert_eq!(redirect_target(GuardDecision::Allow), None);
}

#[test]
fn missing_session_redirects_to_sign_in() {
    assert_eq!(redirect_target(GuardDecision::SignIn), Some("/login"));
}

#[test]
fn wrong_role_redirects_to_fallback() {
    assert_eq!(redirect_target(GuardDecision::Fallback("/")), Some("/"));
}

#[test]
fn valid_verification_signs_in() {
    let verification = TokenVerification { role: Role::Admin, token_valid: true };
    let (state, drop_tokens) = settle(Ok(verification));
    assert_eq!(state, AuthState::verified(verification));
    assert!(!drop_tokens);
}

#[test]
fn invalid_token_is_discarded() {
    let (state, drop_tokens) = settle(Ok(TokenVerification { role: Role::Admin, token_valid: false }));
    assert_eq!(state, AuthState::signed_out());
    assert!(drop_tokens);
}

#[test]
fn rejected_token_is_discarded() {
    let err = ApiError::Api { status: 401, message: "jwt expired".to_owned() };
    let (state, drop_tokens) = settle(Err(err));
    assert_eq!(state, AuthState::signed_out());
    assert!(drop_tokens);
}

#[test]
fn network_failure_keeps_tokens_but_signs_out() {
    let (state, drop_tokens) = settle(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state, AuthState::signed_out());
    assert!(!drop_tokens);
}

#[test]
fn unknown_role_never_reaches_protected_content() {
    let state = AuthState::verified(TokenVerification { role: Role::Unknown, token_valid: true });
    assert_eq!(redirect_target(state.decide(Role::ALL)), Some("/login"));
}

#[test]
fn sign_out_clears_session_and_goes_to_sign_in() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::reactive::owner::Owner;
    use wire::Tag;

    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::verified(TokenVerification { role: Role::SuperAdmin, token_valid: true }));
        let cache = RwSignal::new(QueryCache::default());
        cache.update(|c| {
            c.insert_if_current("/drivers".to_owned(), vec![Tag::Driver], None, 0);
        });
        let visited = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&visited);
        sign_out(auth, cache, move |path: &str, _| log.borrow_mut().push(path.to_owned()));

        assert_eq!(auth.get_untracked(), AuthState::signed_out());
        assert!(cache.with_untracked(QueryCache::is_empty));
        assert_eq!(*visited.borrow(), vec!["/login".to_owned()]);
    });
}
