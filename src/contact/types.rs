//! Contact submission records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A validated submission, ready to be stored.
///
/// Only [`ContactSchema::validate`](super::ContactSchema::validate) produces
/// these from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
}

/// A stored submission row. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Build a stored row from a validated submission
    pub fn from_new(id: i32, new: NewContactSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            service_type: new.service_type,
            message: new.message,
            created_at,
        }
    }
}

/// 201 response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    pub message: String,
    pub id: i32,
}
