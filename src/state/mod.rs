//! Application state provided to the component tree via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with synchronous transition methods;
//! async orchestration (HTTP calls, navigation) lives in pages and
//! components, which write outcomes back through `RwSignal::update`.

pub mod grocery;
pub mod session;
