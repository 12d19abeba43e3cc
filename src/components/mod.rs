//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading/writing state from the
//! Leptos context providers set up in `app`.

pub mod navbar;
