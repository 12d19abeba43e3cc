//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single authoritative in-memory view of "who is signed in",
//! synchronized with the backend's cookie-based session. Constructed
//! once at bootstrap from the cookie, corrected afterwards by who-am-I
//! probe results, and torn down explicitly on logout. The route guard
//! and user-aware components read it via context; nothing else decides
//! login state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config;
use crate::net::error::AuthError;
use crate::net::types::UserProfile;
use crate::util::cookie;

/// Lifecycle of one network-backed operation (login or logout).
///
/// A successful operation returns its slot to `Idle`; there is no
/// terminal success state to get stuck in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    InFlight,
    Failed(AuthError),
}

impl OpStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The recorded failure, if the last attempt failed.
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Session store: identity, cached profile, and the login/logout
/// operation slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Resolved user handle; `None` means signed out. The guest sentinel
    /// is collapsed at every derivation point, so a present handle is
    /// never the sentinel.
    pub user: Option<String>,
    /// Profile resource, refreshed after login and dropped on logout.
    pub profile: Option<UserProfile>,
    pub login: OpStatus,
    pub logout: OpStatus,
    /// Latest issued who-am-I probe; older results are dropped.
    probe_seq: u64,
}

impl SessionState {
    /// Bootstrap the store from a `document.cookie` string.
    pub fn from_cookie(cookies: &str) -> Self {
        Self {
            user: cookie::session_user(cookies, config::SESSION_COOKIE),
            ..Self::default()
        }
    }

    /// Derived on read: identity present (the sentinel never is).
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login_started(&mut self) {
        self.login = OpStatus::InFlight;
    }

    /// Record a login failure. Identity and profile stay untouched; the
    /// user retries by re-submitting the form.
    pub fn login_failed(&mut self, err: AuthError) {
        self.login = OpStatus::Failed(err);
    }

    /// Install the identity re-derived from the refreshed cookie and
    /// clear the in-flight slot.
    pub fn login_succeeded(&mut self, identity: Option<String>) {
        self.user = identity;
        self.login = OpStatus::Idle;
    }

    pub fn logout_started(&mut self) {
        self.logout = OpStatus::InFlight;
    }

    pub fn logout_failed(&mut self, err: AuthError) {
        self.logout = OpStatus::Failed(err);
    }

    /// Full store teardown. Replaces the legacy "navigate, then reload
    /// the page after 100 ms" trick for flushing stale state.
    pub fn logout_succeeded(&mut self) {
        self.reset();
    }

    /// Return to the pristine signed-out state. Also invalidates any
    /// outstanding probe: its sequence can no longer match.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Claim a sequence number for a new who-am-I probe.
    pub fn begin_probe(&mut self) -> u64 {
        self.probe_seq += 1;
        self.probe_seq
    }

    /// Fold a probe result into the store. Returns `false` (and changes
    /// nothing) when a newer probe has been issued since `seq`.
    pub fn apply_probe(&mut self, seq: u64, identity: Option<String>) -> bool {
        if seq != self.probe_seq {
            return false;
        }
        if identity.is_none() {
            self.profile = None;
        }
        self.user = identity;
        true
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
    }
}
