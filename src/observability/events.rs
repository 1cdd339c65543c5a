//! Observable events for the intake service
//!
//! Every structured log line carries one of these as its `event` field so
//! operators can filter on a stable identifier rather than message text.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// No database configured; falling back to the in-memory store
    MemoryStoreSelected,
    /// Migrations applied
    MigrationsApplied,
    /// HTTP server listening
    Serving,

    // Submissions
    /// Submission stored
    SubmissionAccepted,
    /// Submission failed validation
    SubmissionRejected,
    /// Submission valid but could not be stored
    SubmissionFailed,
    /// Submission used a service type outside the known catalog
    UnknownServiceType,

    // Health
    /// Store did not answer a health probe
    HealthDegraded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::MemoryStoreSelected => "MEMORY_STORE_SELECTED",
            Event::MigrationsApplied => "MIGRATIONS_APPLIED",
            Event::Serving => "SERVING",
            Event::SubmissionAccepted => "SUBMISSION_ACCEPTED",
            Event::SubmissionRejected => "SUBMISSION_REJECTED",
            Event::SubmissionFailed => "SUBMISSION_FAILED",
            Event::UnknownServiceType => "UNKNOWN_SERVICE_TYPE",
            Event::HealthDegraded => "HEALTH_DEGRADED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
