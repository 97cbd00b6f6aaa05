// src/errors.rs

// error handling for the prompt-limiter crate

// dependencies
use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible operation in the crate.
///
/// Rate limiter admission itself never fails; these variants cover invalid
/// configuration, unknown provider lookups and logging setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// `rate` was zero.
    #[error("Rate must be positive")]
    InvalidRate,

    /// `per` was zero, negative, NaN or infinite.
    #[error("Window duration must be a positive, finite number of seconds")]
    InvalidWindow,

    /// No client is registered under the requested key.
    #[error("Unknown client '{name}'")]
    UnknownClient { name: String },

    /// The logging configuration file exists but could not be read.
    #[error("Failed to read logging config '{}': {source}", .path.display())]
    LoggingConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The logging configuration file is not valid YAML for `LoggingConfig`.
    #[error("Failed to parse logging config '{}': {source}", .path.display())]
    LoggingConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configured level is not a valid tracing filter directive.
    #[error("Invalid log level '{level}'")]
    InvalidLogLevel { level: String },

    /// A global tracing subscriber has already been installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Result type alias for prompt-limiter operations.
pub type Result<T> = std::result::Result<T, Error>;
