use super::*;

#[test]
fn cookie_value_finds_named_cookie_among_many() {
    let cookies = "sid=abc123; frontend_user_id=alice; theme=dark";
    assert_eq!(
        cookie_value(cookies, "frontend_user_id"),
        Some("alice".to_owned())
    );
}

#[test]
fn cookie_value_missing_cookie_is_none() {
    assert_eq!(cookie_value("sid=abc123", "frontend_user_id"), None);
    assert_eq!(cookie_value("", "frontend_user_id"), None);
}

#[test]
fn cookie_value_percent_decodes() {
    assert_eq!(
        cookie_value("frontend_user_id=j%40ne.doe", "frontend_user_id"),
        Some("j@ne.doe".to_owned())
    );
}

#[test]
fn cookie_value_does_not_match_on_prefix() {
    assert_eq!(
        cookie_value("frontend_user_id_old=bob; frontend_user_id=alice", "frontend_user_id"),
        Some("alice".to_owned())
    );
}

#[test]
fn session_user_returns_handle_unchanged() {
    assert_eq!(
        session_user("frontend_user_id=alice", "frontend_user_id"),
        Some("alice".to_owned())
    );
}

#[test]
fn session_user_collapses_guest_sentinel() {
    assert_eq!(session_user("frontend_user_id=Guest", "frontend_user_id"), None);
}

#[test]
fn session_user_collapses_empty_value() {
    assert_eq!(session_user("frontend_user_id=", "frontend_user_id"), None);
}

#[test]
fn session_user_absent_cookie_is_none() {
    assert_eq!(session_user("", "frontend_user_id"), None);
}

#[test]
fn session_user_is_idempotent_for_unchanged_cookie() {
    let cookies = "frontend_user_id=alice";
    assert_eq!(
        session_user(cookies, "frontend_user_id"),
        session_user(cookies, "frontend_user_id")
    );
}
