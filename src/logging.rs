//! Tracing subscriber setup.
//!
//! The console emits `trace` events for every key, `debug` events for submissions, ignored size
//! writes and subscriber changes, and a `console_draw` span per render pass. Hosts that already
//! install a subscriber can skip this module entirely.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::EnvConfig;
use crate::error::ConsoleError;

pub fn parse_filter(directives: &str) -> Result<EnvFilter, ConsoleError> {
    EnvFilter::try_new(directives)
        .map_err(|source| ConsoleError::invalid_log_filter(directives, source))
}

/// Build a subscriber writing plain-text events to `writer`.
///
/// Shared between `init_logging` and tests, which scope it with
/// `tracing::subscriber::with_default`.
pub fn build_subscriber(
    writer: BoxMakeWriter,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber described by `config`.
///
/// Events go to `config.log_file` (appended) when set, otherwise to stderr.
pub fn init_logging(config: &EnvConfig) -> Result<(), ConsoleError> {
    let filter = parse_filter(config.effective_filter())?;
    let writer = match config.log_file.as_deref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConsoleError::log_file(path, source))?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    build_subscriber(writer, filter).try_init()?;
    Ok(())
}
