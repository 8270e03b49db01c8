//! Core interfaces and value types.

pub mod color;
pub mod component;
pub mod key;
pub mod text;
