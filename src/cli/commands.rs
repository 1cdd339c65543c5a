//! CLI command implementations
//!
//! Startup sequence for `serve`:
//! 1. Configuration load
//! 2. Logger install
//! 3. Store selection (PostgreSQL when configured, otherwise in-memory)
//! 4. HTTP activation

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::observability::{self, Event};
use crate::storage::{MemorySubmissionStore, PostgresSubmissionStore, SubmissionStore};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Migrate { config } => migrate(config.as_deref()),
    }
}

/// Start the HTTP API and serve until interrupted
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = open_store(&config).await?;
        info!(backend = store.backend(), "submission store ready");

        HttpServer::new(config.http.clone(), store, config.locale)?
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Apply database migrations and exit
pub fn migrate(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| CliError::config_error("migrate requires DATABASE_URL to be set"))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = PostgresSubmissionStore::connect(url).await?;
        store.migrate().await?;
        info!(event = %Event::MigrationsApplied, "migrations complete");
        Ok::<(), CliError>(())
    })
}

fn load_config(config_path: Option<&Path>) -> CliResult<AppConfig> {
    let config = AppConfig::load(config_path)?;
    observability::init(&config.log)?;

    info!(
        event = %Event::ConfigLoaded,
        locale = %config.locale,
        database = config.redacted_database_url().as_deref().unwrap_or("none"),
        "configuration loaded"
    );

    Ok(config)
}

async fn open_store(config: &AppConfig) -> CliResult<Arc<dyn SubmissionStore>> {
    match config.database_url.as_deref() {
        Some(url) => Ok(Arc::new(PostgresSubmissionStore::connect(url).await?)),
        None => {
            warn!(
                event = %Event::MemoryStoreSelected,
                "DATABASE_URL not set; submissions are kept in memory and lost on restart"
            );
            Ok(Arc::new(MemorySubmissionStore::new()))
        }
    }
}
