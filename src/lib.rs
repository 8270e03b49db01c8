//! Scrollback text-console widget.
//!
//! Invariant: the console history always holds at least one line, and only the last (live) line
//! accepts input edits and output writes.
//!
//! # Public API Overview
//! - Build a [`Console`] and feed it host key events ([`KeyEvent`], or the raw
//!   `key_pressed`/`key_released` entry points).
//! - Subscribe to submitted commands with [`Console::on_command`]; reply through the
//!   [`CommandOutput`] handle or [`Console::write_output`].
//! - Draw onto any [`DrawSurface`]; [`RecordingSurface`] is a headless implementation.
//! - Optionally install `tracing` output with [`logging::init_logging`].

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Configuration types.
pub use crate::config::{ConsoleOptions, EnvConfig};
/// Error type for logging setup.
pub use crate::error::ConsoleError;

/// Core value types and component traits.
pub use crate::core::color::Color;
pub use crate::core::component::{Component, Focusable};
pub use crate::core::key::{
    is_printable, Key, KeyEvent, KeyEventType, KEY_BACKSPACE, KEY_DELETE, KEY_ESCAPE, KEY_RETURN,
    KEY_TAB,
};

/// Draw surface contract and headless recorder.
pub use crate::render::{
    BitmapFontMetrics, DrawOp, DrawSurface, DrawnText, Rect, RecordingSurface, TransformScope,
};

/// Focus and command notification primitives.
pub use crate::runtime::{CommandOutput, DeferredFocus, SubscriptionId};

/// The console widget and its history.
pub use crate::widgets::console::{
    Console, ConsoleTheme, History, Line, DEFAULT_WELCOME, MIN_BOX_SIZE, PROMPT,
};

/// Returns whether a component exposes focus behavior via [`Focusable`].
pub fn is_focusable(component: &mut dyn Component) -> bool {
    component.as_focusable().is_some()
}

/// Row splitting used for console output.
pub use crate::core::text::utils::split_rows;
/// Monospace column count.
pub use crate::core::text::width::text_columns;
