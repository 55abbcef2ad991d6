//! Tracing subscriber setup for the CLI

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Failures while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level/filter string is not a valid `EnvFilter` directive
    #[error("invalid log level/filter '{value}'")]
    EnvFilter {
        /// Rejected directive
        value: String,
        /// Parser error
        #[source]
        source: ParseError,
    },

    /// The log file could not be opened for appending
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already installed
    #[error("failed to install subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `level` when `prefer_env` is set (no explicit CLI level).
/// With a `log_file`, events are appended to it instead of stderr.
///
/// # Errors
/// Returns an error if the filter is invalid, the file cannot be opened, or a
/// subscriber is already set.
pub fn init(level: &str, prefer_env: bool, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let from_env = if prefer_env {
        EnvFilter::try_from_default_env().ok()
    } else {
        None
    };
    let env_filter = match from_env {
        Some(filter) => filter,
        None => EnvFilter::try_new(level).map_err(|source| LoggingError::EnvFilter {
            value: level.to_string(),
            source,
        })?,
    };

    let (writer, ansi) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(ansi)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}
