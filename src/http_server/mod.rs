//! # HTTP Server Module
//!
//! Axum server for the contact intake API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check, including store availability
//! - `POST /api/contact` - Submit the contact form
//! - `GET /api/contact/schema` - Validation rules for client-side checks
//! - `GET /api/service-types` - Service categories for the form dropdown

pub mod config;
pub mod contact_routes;
pub mod observability_routes;
pub mod server;

pub use config::{HttpConfigError, HttpServerConfig};
pub use server::HttpServer;
