//! Navigation guard: auth-based access control for every route change.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single authority the guard reads. The remote
//! who-am-I probe never feeds a decision directly; its result is folded
//! into the store under a sequence check and takes effect through the
//! store's reactivity. Probe failures degrade to "signed out", so the
//! guard fails closed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config;
use crate::state::session::SessionState;

/// What the guard does with a route transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Proceed unmodified.
    Allow,
    /// Authenticated user on the login route: send to the landing route.
    RedirectLanding,
    /// Unauthenticated user on a protected route: send to the backend
    /// login page, carrying the full external URL to load.
    RedirectLogin(String),
}

/// Decide a transition to `target_path` given the current login state.
pub fn decide(target_path: &str, logged_in: bool) -> GuardOutcome {
    let on_login_route = target_path == config::LOGIN_ROUTE;
    if on_login_route && logged_in {
        GuardOutcome::RedirectLanding
    } else if !on_login_route && !logged_in {
        GuardOutcome::RedirectLogin(external_login_url(target_path))
    } else {
        GuardOutcome::Allow
    }
}

/// Backend login page URL with the originally requested path as a
/// `redirect-to` parameter, so the visitor lands back where intended.
pub fn external_login_url(return_to: &str) -> String {
    format!(
        "{}?redirect-to={}",
        config::EXTERNAL_LOGIN_PATH,
        urlencoding::encode(return_to)
    )
}

/// Re-evaluate [`decide`] on every pathname change and on every session
/// change, so a completing probe or logout retroactively enforces the
/// rule for the route already being shown.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = pathname.get();
        let logged_in = session.with(SessionState::is_logged_in);
        match decide(&target, logged_in) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectLanding => {
                navigate(config::LANDING_ROUTE, NavigateOptions::default());
            }
            GuardOutcome::RedirectLogin(url) => redirect_external(&url),
        }
    });
}

/// Launch a who-am-I probe on every pathname change, including the
/// initial load.
///
/// Each navigation claims a fresh sequence number; a probe result that is
/// no longer current is dropped, so rapid navigation cannot install a
/// stale identity.
pub fn install_session_probe(session: RwSignal<SessionState>, pathname: Memo<String>) {
    Effect::new(move || {
        let _target = pathname.get();
        #[cfg(feature = "hydrate")]
        {
            let Some(seq) = session.try_update(SessionState::begin_probe) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let identity = match crate::net::api::fetch_logged_user().await {
                    Ok(identity) => identity,
                    Err(err) => {
                        log::warn!("session check failed, treating as signed out: {err}");
                        None
                    }
                };
                let applied = session
                    .try_update(|s| s.apply_probe(seq, identity))
                    .unwrap_or(false);
                if !applied {
                    log::debug!("dropped stale session probe result (seq {seq})");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });
}

/// Full location change to a backend-served page, leaving the SPA.
fn redirect_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
