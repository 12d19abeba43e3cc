use super::*;

fn profile(user: &str) -> UserProfile {
    UserProfile {
        user: user.to_owned(),
        full_name: Some("Alice Example".to_owned()),
    }
}

#[test]
fn from_cookie_with_user_handle_is_logged_in() {
    let state = SessionState::from_cookie("frontend_user_id=alice");
    assert_eq!(state.user, Some("alice".to_owned()));
    assert!(state.is_logged_in());
}

#[test]
fn from_cookie_with_guest_sentinel_is_logged_out() {
    let state = SessionState::from_cookie("frontend_user_id=Guest");
    assert_eq!(state.user, None);
    assert!(!state.is_logged_in());
}

#[test]
fn from_cookie_without_cookie_is_logged_out() {
    assert!(!SessionState::from_cookie("").is_logged_in());
    assert!(!SessionState::from_cookie("sid=abc").is_logged_in());
}

#[test]
fn login_lifecycle_success() {
    let mut state = SessionState::default();
    state.login_started();
    assert!(state.login.is_in_flight());

    state.login_succeeded(Some("alice".to_owned()));
    assert!(state.is_logged_in());
    assert_eq!(state.login, OpStatus::Idle);
}

#[test]
fn login_failure_records_error_and_leaves_identity_untouched() {
    let mut state = SessionState::default();
    state.login_started();
    state.login_failed(AuthError::Rejected { status: 401 });

    assert!(!state.is_logged_in());
    assert_eq!(
        state.login.error(),
        Some(&AuthError::Rejected { status: 401 })
    );
    assert!(!state.login.is_in_flight());
}

#[test]
fn logout_failure_leaves_session_intact() {
    let mut state = SessionState::from_cookie("frontend_user_id=alice");
    state.logout_started();
    state.logout_failed(AuthError::Network("connection refused".to_owned()));

    assert!(state.is_logged_in());
    assert!(state.logout.error().is_some());
}

#[test]
fn logout_success_tears_down_the_whole_store() {
    let mut state = SessionState::from_cookie("frontend_user_id=alice");
    state.set_profile(profile("alice"));
    state.logout_started();
    state.logout_succeeded();

    assert_eq!(state, SessionState::default());
    assert!(!state.is_logged_in());
    assert_eq!(state.profile, None);
}

#[test]
fn stale_probe_result_is_dropped() {
    let mut state = SessionState::default();
    let first = state.begin_probe();
    let second = state.begin_probe();

    assert!(!state.apply_probe(first, Some("mallory".to_owned())));
    assert_eq!(state.user, None);

    assert!(state.apply_probe(second, Some("alice".to_owned())));
    assert_eq!(state.user, Some("alice".to_owned()));
}

#[test]
fn signed_out_probe_result_drops_cached_profile() {
    let mut state = SessionState::from_cookie("frontend_user_id=alice");
    state.set_profile(profile("alice"));

    let seq = state.begin_probe();
    assert!(state.apply_probe(seq, None));
    assert!(!state.is_logged_in());
    assert_eq!(state.profile, None);
}

#[test]
fn reset_invalidates_outstanding_probe() {
    let mut state = SessionState::default();
    let seq = state.begin_probe();
    state.reset();

    assert!(!state.apply_probe(seq, Some("alice".to_owned())));
    assert!(!state.is_logged_in());
}
