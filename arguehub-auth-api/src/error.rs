use serde::{Deserialize, Serialize};

use crate::violation::{ValidationFailure, Violation};

/// Public API error response format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            violations: Vec::new(),
        }
    }
}

impl From<ValidationFailure> for ErrorResponse {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            error: "VALIDATION_ERROR".to_string(),
            message: "Request validation failed".to_string(),
            violations: failure.into_violations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn plain_error_omits_violations() {
        let json = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "Unknown shape")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "NOT_FOUND", "message": "Unknown shape" })
        );
    }

    #[test]
    fn validation_failure_becomes_error_body() {
        let failure =
            ValidationFailure::from_violations(vec![Violation::new("password", Rule::MinLength(8))])
                .unwrap();
        let body = ErrorResponse::from(failure);

        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.violations.len(), 1);

        // Clients deserialize the same body back
        let json = serde_json::to_string(&body).unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, body);
    }
}
