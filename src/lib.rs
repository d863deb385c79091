//! HTTP boundary of the Arguehub authentication API.
//!
//! Incoming JSON bodies are checked against the request shapes of
//! [`arguehub_auth_api`] before any business logic sees them.

pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
