//! CLI argument definitions using clap
//!
//! Commands:
//! - transexpress serve [--config <path>] [--port <port>]
//! - transexpress migrate [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TransExpress - contact form intake service
#[derive(Parser, Debug)]
#[command(name = "transexpress")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and HTTP_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Apply database migrations and exit
    Migrate {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
