//! In-process submission store
//!
//! Rows live for the lifetime of the process. Ids start at 1 and are handed
//! out by an atomic counter, so concurrent inserts never share an id.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::{StorageError, StorageResult};
use super::SubmissionStore;
use crate::contact::{ContactSubmission, NewContactSubmission};

#[derive(Debug)]
pub struct MemorySubmissionStore {
    next_id: AtomicI32,
    rows: Mutex<Vec<ContactSubmission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all stored rows in insertion order
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        match self.rows.lock() {
            Ok(rows) => rows.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.submissions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert(&self, submission: NewContactSubmission) -> StorageResult<ContactSubmission> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = ContactSubmission::from_new(id, submission, Utc::now());
        rows.push(row.clone());

        Ok(row)
    }

    async fn ping(&self) -> StorageResult<()> {
        self.rows
            .lock()
            .map(|_| ())
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
