//! Anti-forgery token lookup.
//!
//! The backend embeds the token in a `<meta>` tag on the served page.
//! Absence is tolerated: state-mutating requests are simply sent without
//! a token and the backend decides whether to reject them.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

#[cfg(feature = "hydrate")]
use crate::config;

/// Read the CSRF token from the page's `<meta name="csrf-token">` tag.
///
/// Returns `None` on the server, when the tag is missing, or when its
/// content is blank.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{}\"]", config::CSRF_META_NAME);
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        normalize_token(content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Collapse a missing or blank meta content attribute to `None`.
pub fn normalize_token(content: Option<String>) -> Option<String> {
    content
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
}
