//! Contact submission intake
//!
//! The validation schema is the single source of truth for what the site
//! accepts. The HTTP endpoint enforces it; the presentation layer fetches the
//! same rule table for advisory feedback.
//!
//! # Rules
//!
//! - `name`: at least 2 characters
//! - `phone`: at least 9 characters
//! - `email`: valid email syntax
//! - `serviceType`: at least 1 character
//! - `message`: at least 10 characters
//!
//! Lengths are UTF-16 code units. No trimming, no maximums, no normalization.

mod errors;
mod schema;
mod service_type;
mod types;

pub use errors::{ContactError, ContactResult};
pub use schema::{
    ContactSchema, Field, FieldRule, FieldViolation, Rule, RuleDescription, ViolationCode,
};
pub use service_type::ServiceType;
pub use types::{ContactSubmission, NewContactSubmission, SubmissionAccepted};
