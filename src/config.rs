//! Environment and construction-time configuration.

use std::env;

use crate::core::color::Color;
use crate::widgets::console::{ConsoleTheme, DEFAULT_WELCOME};

pub const LOG_FILE_ENV: &str = "TAPE_CONSOLE_LOG";
pub const LOG_FILTER_ENV: &str = "TAPE_CONSOLE_LOG_FILTER";
pub const DEBUG_KEYS_ENV: &str = "TAPE_CONSOLE_DEBUG_KEYS";

const DEFAULT_LOG_FILTER: &str = "tape_console=info";
const DEBUG_KEYS_LOG_FILTER: &str = "tape_console=trace";

/// Logging configuration read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub log_file: Option<String>,
    pub log_filter: Option<String>,
    pub debug_keys: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_file: env_string_opt(LOG_FILE_ENV),
            log_filter: env_string_opt(LOG_FILTER_ENV),
            debug_keys: env_flag(DEBUG_KEYS_ENV),
        }
    }

    /// Filter directives to use: the explicit filter, else one derived from `debug_keys`.
    pub fn effective_filter(&self) -> &str {
        match self.log_filter.as_deref() {
            Some(filter) => filter,
            None if self.debug_keys => DEBUG_KEYS_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// Construction-time console parameters. Every field stays adjustable through `Console` setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleOptions {
    /// Seeded as the first line's pending output.
    pub welcome: String,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub line_ratio: f32,
    pub theme: ConsoleTheme,
}

impl ConsoleOptions {
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_line_ratio(mut self, line_ratio: f32) -> Self {
        self.line_ratio = line_ratio;
        self
    }

    pub fn with_colors(mut self, background: Color, foreground: Color, input: Color) -> Self {
        self.theme = ConsoleTheme {
            background,
            foreground,
            input,
        };
        self
    }
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.to_string(),
            width: 200,
            height: 200,
            margin: 20,
            line_ratio: 1.5,
            theme: ConsoleTheme::default(),
        }
    }
}
