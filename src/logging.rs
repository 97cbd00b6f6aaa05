// src/logging.rs

//! Logging setup from an optional YAML file.
//!
//! ```yaml
//! level: "info,prompt_limiter=debug"
//! format: json        # pretty | compact | json
//! with_target: true
//! with_thread_ids: false
//! ```
//!
//! Every field is optional. A missing file means "use the defaults".
//! `RUST_LOG`, when set, takes precedence over `level`.

// dependencies
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::{Error, Result};

/// Location `setup_logging` callers conventionally pass.
pub const DEFAULT_LOGGING_CONFIG_PATH: &str = "config/logging_config.yaml";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"warn,prompt_limiter=trace"`.
    pub level: String,
    pub format: LogFormat,
    pub with_target: bool,
    pub with_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_target: true,
            with_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Load the configuration at `path`, or the defaults if no file exists there.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| Error::LoggingConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| Error::LoggingConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // an empty document deserializes to unit, not to a defaulted struct
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Build the level filter, letting `RUST_LOG` override the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|_| Error::InvalidLogLevel {
            level: self.level.clone(),
        })
    }

    /// Install this configuration as the global tracing subscriber.
    pub fn init(&self) -> Result<()> {
        let filter = self.env_filter()?;
        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(self.with_target)
                        .with_thread_ids(self.with_thread_ids),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(self.with_target)
                        .with_thread_ids(self.with_thread_ids),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_target(self.with_target)
                        .with_thread_ids(self.with_thread_ids),
                )
                .try_init(),
        };
        result.map_err(|e| Error::SubscriberInit(e.to_string()))?;

        tracing::info!(level = %self.level, format = ?self.format, "Logging initialized");
        Ok(())
    }
}

/// Load the logging configuration at `path` (defaults if absent) and install it.
///
/// Returns the configuration that was applied.
pub fn setup_logging(path: impl AsRef<Path>) -> Result<LoggingConfig> {
    let config = LoggingConfig::load(path)?;
    config.init()?;
    Ok(config)
}
