//! Static configuration shared across the client.
//!
//! Route and endpoint paths are fixed at build time; the route table is
//! deliberately static configuration, not data.

// ── Session cookie ──────────────────────────────────────────────

/// Cookie the backend sets on successful authentication.
pub const SESSION_COOKIE: &str = "frontend_user_id";

/// Cookie value meaning "no authenticated user".
pub const GUEST_SENTINEL: &str = "Guest";

/// `<meta>` tag carrying the anti-forgery token, read at request time.
pub const CSRF_META_NAME: &str = "csrf-token";

// ── Client routes ───────────────────────────────────────────────

/// Authenticated landing route, also the post-logout home.
pub const LANDING_ROUTE: &str = "/";

/// The only route reachable while signed out.
pub const LOGIN_ROUTE: &str = "/account/login";

/// Protected shopping-list feature route.
pub const SHOPPING_LIST_ROUTE: &str = "/shopping-list";

/// Backend-hosted login page unauthenticated visitors are sent to,
/// with the originally requested path as a `redirect-to` parameter.
pub const EXTERNAL_LOGIN_PATH: &str = "/login";

// ── Backend endpoints ───────────────────────────────────────────

/// Credential submission endpoint; the response sets the session cookie.
pub const LOGIN_ENDPOINT: &str = "/login";

/// Session teardown endpoint; the response clears the session cookie.
pub const LOGOUT_ENDPOINT: &str = "/logout";

/// Who-am-I probe, answered from the session cookie.
pub const LOGGED_USER_ENDPOINT: &str = "/api/method/frappe.auth.get_logged_user";

/// Profile resource for the signed-in user.
pub const USER_PROFILE_ENDPOINT: &str = "/api/method/cartful.api.user.get_profile";

/// Method-path prefix for the grocery list API.
pub const GROCERY_METHOD_PREFIX: &str = "/api/method/cartful.api.grocery";
