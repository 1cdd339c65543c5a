//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::{HttpConfigError, HttpServerConfig};
use super::contact_routes::{contact_routes, ContactState};
use super::observability_routes::health_routes;
use crate::locale::Locale;
use crate::observability::Event;
use crate::storage::{MemorySubmissionStore, SubmissionStore};

/// HTTP server for the contact intake API
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the given store
    pub fn new(
        config: HttpServerConfig,
        store: Arc<dyn SubmissionStore>,
        locale: Locale,
    ) -> Result<Self, HttpConfigError> {
        let addr = config.listen_addr()?;
        let router = Self::build_router(&config, store, locale)?;
        Ok(Self { addr, router })
    }

    /// Create a server backed by a fresh in-memory store
    pub fn in_memory(config: HttpServerConfig, locale: Locale) -> Result<Self, HttpConfigError> {
        Self::new(config, Arc::new(MemorySubmissionStore::new()), locale)
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        store: Arc<dyn SubmissionStore>,
        locale: Locale,
    ) -> Result<Router, HttpConfigError> {
        let contact_state = Arc::new(ContactState::new(Arc::clone(&store), locale));

        Ok(Router::new()
            .merge(health_routes(store))
            .nest("/api", contact_routes(contact_state))
            .layer(TraceLayer::new_for_http())
            .layer(config.cors_layer()?))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!(event = %Event::Serving, addr = %self.addr, "contact API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
