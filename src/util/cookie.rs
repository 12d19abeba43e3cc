//! Session-cookie parsing.
//!
//! The backend communicates the signed-in identity exclusively through a
//! cookie. Parsing is pure so the derivation can be tested natively; only
//! the `document.cookie` read touches the browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::config;

/// Look up a cookie by name in a `document.cookie`-formatted string.
///
/// Values are percent-decoded; a value that fails to decode is returned
/// verbatim.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != name {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map_or_else(|_| value.to_owned(), |decoded| decoded.into_owned()),
        )
    })
}

/// Resolve the session identity from a cookie string.
///
/// Returns `None` when the cookie is missing, empty, or carries the guest
/// sentinel. Idempotent: repeated calls over the same cookie string agree.
pub fn session_user(cookies: &str, name: &str) -> Option<String> {
    cookie_value(cookies, name)
        .filter(|value| !value.is_empty() && value.as_str() != config::GUEST_SENTINEL)
}

/// Read `document.cookie`. Empty on the server or when the document is
/// unavailable.
pub fn read_document_cookie() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
