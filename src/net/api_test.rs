use super::*;

#[test]
fn login_payload_includes_csrf_token_when_present() {
    let payload = login_payload("a@b.com", "hunter2", Some("tok-1"));
    assert_eq!(
        payload,
        serde_json::json!({ "usr": "a@b.com", "pwd": "hunter2", "csrf_token": "tok-1" })
    );
}

#[test]
fn login_payload_omits_csrf_key_when_absent() {
    let payload = login_payload("a@b.com", "hunter2", None);
    assert_eq!(payload, serde_json::json!({ "usr": "a@b.com", "pwd": "hunter2" }));
    assert!(payload.get("csrf_token").is_none());
}

#[test]
fn logged_user_from_message_collapses_empty_and_guest() {
    assert_eq!(logged_user_from_message(""), None);
    assert_eq!(logged_user_from_message("Guest"), None);
    assert_eq!(logged_user_from_message("alice"), Some("alice".to_owned()));
}

#[test]
fn grocery_method_formats_expected_path() {
    assert_eq!(
        grocery_method("get_items"),
        "/api/method/cartful.api.grocery.get_items"
    );
}

#[test]
fn session_check_failed_message_formats_status() {
    assert_eq!(session_check_failed_message(502), "session check failed: 502");
}

#[test]
fn profile_request_failed_message_formats_status() {
    assert_eq!(profile_request_failed_message(403), "profile request failed: 403");
}

#[test]
fn grocery_request_failed_message_formats_status() {
    assert_eq!(grocery_request_failed_message(500), "grocery request failed: 500");
}
