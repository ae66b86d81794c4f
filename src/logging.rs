//! Logging Setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].
//!
//! `RUST_LOG` takes precedence over the configured level. Logs go to stderr,
//! or to the configured file (appended) when one is set, so that stdout stays
//! free for command output.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for development
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unknown log format: {0} (expected pretty or json)")]
    UnknownFormat(String),

    #[error("Invalid log filter {filter:?}: {error}")]
    InvalidFilter { filter: String, error: String },

    #[error("Failed to open log file {path:?}: {error}")]
    File { path: PathBuf, error: String },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the level filter: `RUST_LOG` when set, otherwise `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidFilter {
        filter: level.to_string(),
        error: e.to_string(),
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let format: LogFormat = config.format.parse()?;
    let filter = build_filter(&config.level)?;

    let file = match &config.file {
        Some(path) => {
            let path = PathBuf::from(path);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| LoggingError::File {
                    path: path.clone(),
                    error: e.to_string(),
                })?;
            Some(file)
        }
        None => None,
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match (format, file) {
        (LogFormat::Json, Some(file)) => fmt::layer().json().with_writer(Mutex::new(file)).boxed(),
        (LogFormat::Json, None) => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        (LogFormat::Pretty, Some(file)) => fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .boxed(),
        (LogFormat::Pretty, None) => fmt::layer().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
