//! Text helpers (row splitting, width calculations).
//!
//! These helpers are pure (string in/value out) and live under `core` so widgets and surfaces can
//! depend on them without importing each other.

pub mod utils;
pub mod width;
