use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health,
        crate::handlers::validate::validate_shape,
    ),
    components(schemas(
        arguehub_auth_api::SignUpRequest,
        arguehub_auth_api::VerifyEmailRequest,
        arguehub_auth_api::LoginRequest,
        arguehub_auth_api::ForgotPasswordRequest,
        arguehub_auth_api::VerifyForgotPasswordRequest,
        arguehub_auth_api::ShapeKind,
        arguehub_auth_api::Violation,
        arguehub_auth_api::ErrorResponse,
    )),
    tags(
        (name = "Health"),
        (name = "Validation"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_routes_and_shapes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/validate/{shape}"));

        let schemas = doc.components.expect("components").schemas;
        for name in [
            "SignUpRequest",
            "VerifyEmailRequest",
            "LoginRequest",
            "ForgotPasswordRequest",
            "VerifyForgotPasswordRequest",
        ] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
