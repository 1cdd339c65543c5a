//! Contact endpoint errors
//!
//! Two outcomes reach the caller as errors:
//! - `Malformed` (400): field-level violations, returned in full
//! - `Storage` (500): generic message only; the cause stays in the logs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::schema::FieldViolation;
use crate::locale::{text, Locale, MessageKey};
use crate::storage::StorageError;

/// Result type for contact intake
pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Submission failed schema validation
    #[error("malformed form data ({} violations)", .violations.len())]
    Malformed {
        locale: Locale,
        violations: Vec<FieldViolation>,
    },

    /// Submission was valid but could not be stored
    #[error("failed to store submission: {source}")]
    Storage {
        locale: Locale,
        #[source]
        source: StorageError,
    },
}

impl ContactError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Malformed { .. } => StatusCode::BAD_REQUEST,
            ContactError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl From<ContactError> for ErrorResponse {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Malformed { locale, violations } => Self {
                message: text(MessageKey::MalformedFormData, locale).to_string(),
                errors: Some(violations),
            },
            ContactError::Storage { locale, .. } => Self {
                message: text(MessageKey::SubmissionFailed, locale).to_string(),
                errors: None,
            },
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
