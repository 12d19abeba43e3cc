//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the
//! session cookie included and the CSRF token attached to every
//! state-mutating request. Server-side (SSR): stubs returning errors,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return [`AuthError`] so the session store can record a
//! tagged failure on the issuing operation; list/profile calls return
//! formatted message strings surfaced in the page's error slot.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::config;
use crate::net::error::AuthError;
use crate::net::types::{GroceryItem, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str, csrf_token: Option<&str>) -> serde_json::Value {
    let mut payload = serde_json::json!({ "usr": email, "pwd": password });
    if let Some(token) = csrf_token {
        payload["csrf_token"] = serde_json::Value::String(token.to_owned());
    }
    payload
}

/// Collapse the probe's `message` field to an identity: empty and the
/// guest sentinel both mean "nobody is signed in".
#[cfg(any(test, feature = "hydrate"))]
fn logged_user_from_message(message: &str) -> Option<String> {
    if message.is_empty() || message == config::GUEST_SENTINEL {
        None
    } else {
        Some(message.to_owned())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn grocery_method(method: &str) -> String {
    format!("{}.{method}", config::GROCERY_METHOD_PREFIX)
}

#[cfg(any(test, feature = "hydrate"))]
fn session_check_failed_message(status: u16) -> String {
    format!("session check failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn grocery_request_failed_message(status: u16) -> String {
    format!("grocery request failed: {status}")
}

/// Attach the CSRF token header when the page carries one; requests
/// without a token are sent as-is and left to the backend to judge.
#[cfg(feature = "hydrate")]
fn with_csrf(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::csrf::read_token() {
        Some(token) => req.header("X-CSRF-Token", &token),
        None => req,
    }
}

/// Submit credentials to `POST /login`.
///
/// On success the backend sets the session cookie; the response body is
/// otherwise opaque to the client.
///
/// # Errors
///
/// [`AuthError::Network`] when the request never reaches the server,
/// [`AuthError::Rejected`] on a non-2xx response.
pub async fn login(email: &str, password: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = login_payload(email, password, crate::util::csrf::read_token().as_deref());
        let resp = gloo_net::http::Request::post(config::LOGIN_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Rejected { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// End the backend session via `POST /logout`.
///
/// # Errors
///
/// Same taxonomy as [`login`]; on failure the session cookie is assumed
/// unchanged.
pub async fn logout() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_csrf(gloo_net::http::Request::post(config::LOGOUT_ENDPOINT))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Rejected { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Ask the backend who is signed in, from its point of view.
///
/// Returns `None` when nobody is (empty or guest message).
///
/// # Errors
///
/// [`AuthError::SessionCheck`] on any transport, status, or decode
/// failure; callers degrade this to "signed out".
pub async fn fetch_logged_user() -> Result<Option<String>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(config::LOGGED_USER_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AuthError::SessionCheck(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::SessionCheck(session_check_failed_message(
                resp.status(),
            )));
        }
        let body: crate::net::types::LoggedUser = resp
            .json()
            .await
            .map_err(|e| AuthError::SessionCheck(e.to_string()))?;
        Ok(logged_user_from_message(&body.message))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::SessionCheck("not available on server".to_owned()))
    }
}

/// Fetch the signed-in user's profile for the session cache.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_user_profile() -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(config::USER_PROFILE_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_request_failed_message(resp.status()));
        }
        let body: crate::net::types::Envelope<UserProfile> =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the shopping list, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_grocery_items() -> Result<Vec<GroceryItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&grocery_method("get_items"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(grocery_request_failed_message(resp.status()));
        }
        let body: crate::net::types::Envelope<Vec<GroceryItem>> =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Add an item and return the stored entry.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn add_grocery_item(name: &str) -> Result<GroceryItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = with_csrf(gloo_net::http::Request::post(&grocery_method("add_item")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(grocery_request_failed_message(resp.status()));
        }
        let body: crate::net::types::Envelope<GroceryItem> =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Tick or untick an item.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn update_grocery_item(name: &str, completed: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "completed": i32::from(completed) });
        let resp = with_csrf(gloo_net::http::Request::post(&grocery_method("update_item")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(grocery_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, completed);
        Err("not available on server".to_owned())
    }
}

/// Remove an item from the list.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn delete_grocery_item(name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        let resp = with_csrf(gloo_net::http::Request::post(&grocery_method("delete_item")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(grocery_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}
