//! # arguehub-auth-api
//!
//! Request shapes of the Arguehub authentication API and the rules each
//! field must satisfy before business logic runs.
//! This crate has no web framework dependency and is WASM-compatible, so the
//! frontend can run the exact same checks as the backend.
//!
//! ## Features
//!
//! - Request DTOs (`SignUpRequest`, `LoginRequest`, etc.)
//! - Rule table per shape and a single validation pass ([`Shape`], [`validate_payload`])
//! - Violation reporting ([`Violation`], [`ValidationFailure`])
//! - Error response format ([`ErrorResponse`])
//! - Generic response wrapper ([`AppResponse`])
//!
//! ## Example
//!
//! ```rust
//! use arguehub_auth_api::{LoginRequest, Rule, Shape};
//!
//! let body = serde_json::json!({ "email": "a@b.com", "password": "short" });
//! let failure = LoginRequest::from_value(&body).unwrap_err();
//! assert!(failure.contains("password", Rule::MinLength(8)));
//! ```

pub mod error;
pub mod requests;
pub mod result;
pub mod rules;
pub mod shape;
pub mod violation;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use result::{AppResponse, StatusCode};
pub use rules::{PASSWORD_MIN_LENGTH, Rule};
pub use shape::{FieldRules, Fields, Shape, ShapeKind, ValidatedPayload, validate_payload};
pub use violation::{ValidationFailure, Violation};
