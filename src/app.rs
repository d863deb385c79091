// src/app.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::docs::openapi;
use crate::error::AppError;
use crate::handlers::health::health;
use crate::handlers::validate::validate_shape;

/// Construit l'application complète
pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi))
        .route("/validate/{shape}", post(validate_shape))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {uri}"))
}
