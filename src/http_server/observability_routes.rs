//! Observability HTTP Routes
//!
//! Health check reporting process liveness and store availability.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::observability::Event;
use crate::storage::SubmissionStore;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}

/// Health check route at root level
pub fn health_routes(store: Arc<dyn SubmissionStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

/// Health check handler; 503 when the store does not answer
async fn health_handler(State(store): State<Arc<dyn SubmissionStore>>) -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                version,
                storage: "up".to_string(),
            }),
        ),
        Err(e) => {
            warn!(
                event = %Event::HealthDegraded,
                backend = store.backend(),
                code = e.code(),
                error = %e,
                "store health probe failed"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version,
                    storage: "down".to_string(),
                }),
            )
        }
    }
}
