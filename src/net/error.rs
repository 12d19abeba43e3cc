//! Auth-flow error taxonomy.

use thiserror::Error;

/// Failure of a login, logout, or session-check request.
///
/// Every variant ends up on the issuing operation's error slot and is
/// rendered to the user; none crashes the application or leaves a
/// navigation half-applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a failure status, covering bad
    /// credentials and missing/invalid CSRF tokens alike.
    #[error("sign-in rejected ({status})")]
    Rejected { status: u16 },
    /// The who-am-I probe errored. Always degraded to "signed out" by
    /// the caller, never propagated past the guard.
    #[error("session check failed: {0}")]
    SessionCheck(String),
}
