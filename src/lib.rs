//! transexpress - contact intake service for the TransExpress moving company site
//!
//! The site is static apart from one write path: the contact form. This crate
//! validates submissions, stores them, and serves the few read-only lookups
//! the form needs.

pub mod cli;
pub mod config;
pub mod contact;
pub mod http_server;
pub mod locale;
pub mod observability;
pub mod storage;
