//! Submission storage
//!
//! The store holds every accepted contact submission. It is append-only:
//! there is no update or delete path.
//!
//! # Guarantees
//!
//! - Each insert is atomic
//! - Each insert is assigned a unique, increasing id
//! - `created_at` is assigned by the store and never changes
//!
//! Two backends exist: PostgreSQL for deployments and an in-process store
//! used when no database is configured.
//!
//! # Column widths
//!
//! The validator sets no maximum lengths. PostgreSQL enforces the column
//! widths from `migrations/` (`name` 100, `phone` 20, `email` 100,
//! `service_type` 50) and rejects longer values with
//! [`StorageError::Constraint`], which the API reports as a 500. The
//! in-memory store has no widths and accepts them.

mod errors;
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::contact::{ContactSubmission, NewContactSubmission};

pub use errors::{StorageError, StorageResult};
pub use memory::MemorySubmissionStore;
pub use postgres::PostgresSubmissionStore;

/// Persistence seam for contact submissions
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a validated submission and return the stored row
    async fn insert(&self, submission: NewContactSubmission) -> StorageResult<ContactSubmission>;

    /// Check that the store can currently accept writes
    async fn ping(&self) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}
