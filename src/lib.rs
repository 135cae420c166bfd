//! tzfind-rs
//!
//! Workspace umbrella crate: re-exports [`tzfind_core`] so the demos and
//! downstream tooling can depend on a single name.
pub use tzfind_core::*;
