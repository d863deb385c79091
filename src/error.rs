// src/error.rs

use arguehub_auth_api::shape::UnknownShape;
use arguehub_auth_api::{ErrorResponse, StatusCode as ApiStatusCode, ValidationFailure};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::convert_status;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs de Validation ===
    #[error("{0}")]
    Validation(#[from] ValidationFailure),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Payload too large")]
    PayloadTooLarge,

    // === Erreurs de routage ===
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, message) = self.get_error_info();

        let body = match self {
            AppError::Validation(failure) => {
                tracing::warn!(%failure, "Request validation failed");
                ErrorResponse::from(failure)
            }
            _ => {
                tracing::debug!(error_code, %status, %message, "Request rejected");
                ErrorResponse::new(error_code, message)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Statut partagé avec le frontend
    fn api_status(&self) -> ApiStatusCode {
        match self {
            AppError::Validation(_) => ApiStatusCode::UnprocessableEntity,
            AppError::InvalidInput(_) => ApiStatusCode::BadRequest,
            AppError::PayloadTooLarge => ApiStatusCode::PayloadTooLarge,
            AppError::NotFound(_) => ApiStatusCode::NotFound,
        }
    }

    /// Récupère le code et le message d'erreur pour la réponse HTTP
    fn get_error_info(&self) -> (&'static str, String) {
        match self {
            AppError::Validation(failure) => ("VALIDATION_ERROR", failure.to_string()),
            AppError::InvalidInput(msg) => ("INVALID_INPUT", msg.clone()),
            AppError::PayloadTooLarge => {
                ("PAYLOAD_TOO_LARGE", "Request body is too large".to_string())
            }
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
        }
    }

    // === Constructeurs helpers ===
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    /// Retourne le code de statut HTTP
    pub fn status_code(&self) -> StatusCode {
        convert_status(self.api_status())
    }
}

// === Conversions automatiques depuis d'autres types d'erreurs ===

// Depuis axum::extract::rejection::JsonRejection
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::invalid_input(format!("Invalid JSON: {}", err.body_text()))
    }
}

// Depuis UnknownShape (segment de chemin inconnu)
impl From<UnknownShape> for AppError {
    fn from(err: UnknownShape) -> Self {
        AppError::not_found(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arguehub_auth_api::{Rule, Violation};

    fn failure() -> ValidationFailure {
        ValidationFailure::from_violations(vec![Violation::new("email", Rule::Required)]).unwrap()
    }

    #[test]
    fn validation_error_maps_to_422_status() {
        assert_eq!(
            AppError::from(failure()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn validation_error_displays_violations() {
        assert_eq!(
            AppError::from(failure()).to_string(),
            "Validation failed: email (required)"
        );
    }

    #[test]
    fn invalid_input_maps_to_400_status() {
        assert_eq!(
            AppError::invalid_input("test").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unknown_shape_maps_to_404_status() {
        let err = AppError::from(UnknownShape("register".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Unknown shape: register");
    }

    #[test]
    fn payload_too_large_maps_to_413_status() {
        assert_eq!(
            AppError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn into_response_uses_status_code() {
        let errors = [
            AppError::from(failure()),
            AppError::invalid_input("bad"),
            AppError::PayloadTooLarge,
            AppError::not_found("nope"),
        ];
        for err in errors {
            let expected = err.status_code();
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn validation_error_into_response_carries_violations() {
        let response = AppError::from(failure()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.violations, vec![Violation::new("email", Rule::Required)]);
    }
}
