use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInstall(#[from] tracing_subscriber::util::TryInitError),
}

impl ConsoleError {
    #[must_use]
    pub fn log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LogFile {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn invalid_log_filter(
        filter: impl Into<String>,
        source: tracing_subscriber::filter::ParseError,
    ) -> Self {
        Self::InvalidLogFilter {
            filter: filter.into(),
            source,
        }
    }
}
