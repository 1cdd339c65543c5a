//! Listener and CORS settings for the contact API
//!
//! Values are checked once, when configuration is loaded, so a bad
//! `HTTP_HOST` or CORS origin stops startup instead of surfacing later as
//! a bind failure or a silently dropped origin.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    #[error("listen host '{0}' is not an IP address")]
    Host(String),

    #[error("CORS origin '{origin}' {reason}")]
    CorsOrigin { origin: String, reason: &'static str },
}

/// Where the API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Listen IP address
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to post the contact form; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    Ipv4Addr::UNSPECIFIED.to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_origins() -> Vec<String> {
    // Vite dev server
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Check every setting without binding anything
    pub fn validate(&self) -> Result<(), HttpConfigError> {
        self.listen_addr()?;
        self.cors_layer()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, HttpConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| HttpConfigError::Host(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// CORS layer for the configured origins
    pub fn cors_layer(&self) -> Result<CorsLayer, HttpConfigError> {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.cors_origins.is_empty() {
            return Ok(layer.allow_origin(Any));
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|origin| parse_origin(origin))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(layer.allow_origin(AllowOrigin::list(origins)))
    }
}

/// Browsers send `Origin` as `scheme://host[:port]` with no path
fn parse_origin(origin: &str) -> Result<HeaderValue, HttpConfigError> {
    let invalid = |reason| HttpConfigError::CorsOrigin {
        origin: origin.to_string(),
        reason,
    };

    if origin == "*" {
        return Err(invalid("is a wildcard; leave cors_origins empty to allow any origin"));
    }

    let authority = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(|| invalid("must start with http:// or https://"))?;

    if authority.is_empty() || authority.contains('/') {
        return Err(invalid("must be scheme and host only, without a path"));
    }

    HeaderValue::from_str(origin).map_err(|_| invalid("is not a valid header value"))
}
