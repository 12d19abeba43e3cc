//! # cartful-client
//!
//! Leptos + WASM frontend for the Cartful grocery shopping-list
//! application. The backend owns authentication through a cookie-based
//! session; this crate derives the signed-in identity from that cookie,
//! issues CSRF-protected login/logout requests, and gates every
//! client-side route on login state.
//!
//! This crate contains pages, components, application state, the HTTP
//! API layer, and the navigation guard.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
