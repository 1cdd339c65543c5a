//! Application configuration
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `.env` file (loaded into the process environment via dotenvy)
//! 3. JSON config file, if given
//! 4. Environment variables:
//!    `DATABASE_URL`, `HTTP_HOST`, `HTTP_PORT`, `APP_LOCALE`, `LOG_LEVEL`, `LOG_MODE`
//!
//! A missing `database_url` selects the in-memory store.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::{HttpConfigError, HttpServerConfig};
use crate::locale::Locale;
use crate::observability::LogConfig;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("invalid http settings: {0}")]
    Http(#[from] HttpConfigError),
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    /// PostgreSQL connection string; absent means in-memory storage
    #[serde(default)]
    pub database_url: Option<String>,

    /// Language for every user-facing string (default: pl)
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, an optional JSON file, and the environment.
    /// HTTP settings are validated after all overrides are applied.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|var| env::var(var).ok())?;
        config.http.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production). Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("DATABASE_URL") {
            self.database_url = Some(url);
        }

        if let Some(host) = get("HTTP_HOST") {
            self.http.host = host;
        }

        if let Some(port) = get("HTTP_PORT") {
            self.http.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "HTTP_PORT",
                reason: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(locale) = get("APP_LOCALE") {
            self.locale = locale.parse().map_err(|e: crate::locale::UnknownLocale| {
                ConfigError::InvalidValue {
                    var: "APP_LOCALE",
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(level) = get("LOG_LEVEL") {
            self.log.level = level;
        }

        if let Some(mode) = get("LOG_MODE") {
            self.log.mode = mode.parse().map_err(|e: crate::observability::LoggingError| {
                ConfigError::InvalidValue {
                    var: "LOG_MODE",
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(())
    }

    /// Database URL with credentials masked, for logs
    pub fn redacted_database_url(&self) -> Option<String> {
        self.database_url.as_deref().map(redact_url)
    }
}

fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
