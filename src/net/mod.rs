//! Networking modules for the HTTP backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the wire schema, and
//! `error` carries the auth-flow error taxonomy surfaced in the UI.

pub mod api;
pub mod error;
pub mod types;
