//! Contact HTTP Routes
//!
//! The only write path into the system. Each POST is an independent,
//! unconditional insert attempt: no auth, no dedup, no retries.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::contact::{
    ContactError, ContactResult, ContactSchema, RuleDescription, ServiceType, SubmissionAccepted,
};
use crate::locale::{text, Locale, MessageKey};
use crate::observability::Event;
use crate::storage::SubmissionStore;

// ==================
// Shared State
// ==================

/// Contact state shared across handlers
pub struct ContactState {
    pub store: Arc<dyn SubmissionStore>,
    pub schema: ContactSchema,
}

impl ContactState {
    pub fn new(store: Arc<dyn SubmissionStore>, locale: Locale) -> Self {
        Self {
            store,
            schema: ContactSchema::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.schema.locale()
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ServiceTypeEntry {
    pub value: &'static str,
    pub label: &'static str,
}

// ==================
// Contact Routes
// ==================

/// Create contact routes (nested under `/api`)
pub fn contact_routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contact/schema", get(contact_schema))
        .route("/service-types", get(list_service_types))
        .with_state(state)
}

/// POST /api/contact
///
/// The body is read raw so that malformed JSON and missing fields are
/// reported through the same field-level violation list.
async fn submit_contact(
    State(state): State<Arc<ContactState>>,
    body: Bytes,
) -> ContactResult<(StatusCode, Json<SubmissionAccepted>)> {
    let locale = state.locale();
    let input: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let submission = state.schema.validate(&input).map_err(|violations| {
        debug!(
            event = %Event::SubmissionRejected,
            violations = violations.len(),
            "contact submission failed validation"
        );
        ContactError::Malformed { locale, violations }
    })?;

    if ServiceType::parse(&submission.service_type).is_none() {
        info!(
            event = %Event::UnknownServiceType,
            service_type = %submission.service_type,
            "accepting service type outside the known catalog"
        );
    }

    let row = state.store.insert(submission).await.map_err(|source| {
        error!(
            event = %Event::SubmissionFailed,
            backend = state.store.backend(),
            code = source.code(),
            error = %source,
            "failed to store contact submission"
        );
        ContactError::Storage { locale, source }
    })?;

    info!(
        event = %Event::SubmissionAccepted,
        id = row.id,
        service_type = %row.service_type,
        "contact submission stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionAccepted {
            message: text(MessageKey::SubmissionAccepted, locale).to_string(),
            id: row.id,
        }),
    ))
}

/// GET /api/contact/schema
async fn contact_schema(State(state): State<Arc<ContactState>>) -> Json<Vec<RuleDescription>> {
    Json(state.schema.describe())
}

/// GET /api/service-types
async fn list_service_types(
    State(state): State<Arc<ContactState>>,
) -> Json<Vec<ServiceTypeEntry>> {
    let locale = state.locale();
    Json(
        ServiceType::ALL
            .iter()
            .map(|t| ServiceTypeEntry {
                value: t.as_str(),
                label: t.label(locale),
            })
            .collect(),
    )
}
