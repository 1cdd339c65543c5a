//! Observability for the intake service
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle events, logged as the `event` field
//!
//! # Usage
//!
//! ```ignore
//! use transexpress::observability::{self, Event, LogConfig};
//!
//! observability::init(&LogConfig::default())?;
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:5000", "listening");
//! ```

mod events;
mod logging;

pub use events::Event;
pub use logging::{init, LogConfig, LogMode, LoggingError};
