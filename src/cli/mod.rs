//! CLI module for the TransExpress contact service
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP API
//! - migrate: Apply database migrations and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{migrate, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
