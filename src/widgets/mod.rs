//! Widgets.

pub mod console;

pub use console::{Console, ConsoleTheme, History, Line};
