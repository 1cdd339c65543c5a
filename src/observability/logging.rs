//! tracing subscriber setup
//!
//! The filter comes from the configured level; `RUST_LOG` syntax is accepted
//! (e.g. `info,sqlx=warn`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Output format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    #[default]
    Default,
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogMode {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "full" => Ok(LogMode::Default),
            "json" => Ok(LogMode::Json),
            "pretty" => Ok(LogMode::Pretty),
            "compact" => Ok(LogMode::Compact),
            _ => Err(LoggingError::UnknownMode(s.to_string())),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (default: human-readable)
    #[serde(default)]
    pub mode: LogMode,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            mode: LogMode::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("unknown log mode '{0}' (expected default, json, pretty or compact)")]
    UnknownMode(String),
    #[error("failed to init logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::from_str(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.mode {
        LogMode::Default => builder.finish().try_init()?,
        LogMode::Json => builder.json().finish().try_init()?,
        LogMode::Pretty => builder.pretty().finish().try_init()?,
        LogMode::Compact => builder.compact().finish().try_init()?,
    }

    Ok(())
}
