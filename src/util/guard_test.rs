use super::*;

#[test]
fn login_route_while_authenticated_redirects_to_landing() {
    assert_eq!(
        decide(config::LOGIN_ROUTE, true),
        GuardOutcome::RedirectLanding
    );
}

#[test]
fn login_route_while_unauthenticated_is_allowed() {
    assert_eq!(decide(config::LOGIN_ROUTE, false), GuardOutcome::Allow);
}

#[test]
fn protected_route_while_authenticated_is_allowed() {
    assert_eq!(decide("/shopping-list", true), GuardOutcome::Allow);
    assert_eq!(decide("/", true), GuardOutcome::Allow);
}

#[test]
fn protected_route_while_unauthenticated_redirects_to_external_login() {
    assert_eq!(
        decide("/shopping-list", false),
        GuardOutcome::RedirectLogin("/login?redirect-to=%2Fshopping-list".to_owned())
    );
}

#[test]
fn landing_route_while_unauthenticated_redirects_with_return_to() {
    assert_eq!(
        decide("/", false),
        GuardOutcome::RedirectLogin("/login?redirect-to=%2F".to_owned())
    );
}

#[test]
fn external_login_url_percent_encodes_return_path() {
    assert_eq!(
        external_login_url("/shopping-list"),
        "/login?redirect-to=%2Fshopping-list"
    );
}
