use arguehub_auth_api::{ShapeKind, ValidatedPayload, validate_payload};
use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
};
use serde_json::Value;

use crate::error::AppError;
use crate::response::AppResponse;

/// POST /validate/{shape}
/// Checks a raw payload against one of the request shapes
#[utoipa::path(
    post,
    path = "/validate/{shape}",
    tag = "Validation",
    params(
        ("shape" = ShapeKind, Path, description = "Request shape to validate against")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Payload satisfies every constraint", body = ValidatedPayload),
        (status = 400, description = "Body is not JSON", body = arguehub_auth_api::ErrorResponse),
        (status = 404, description = "Unknown shape", body = arguehub_auth_api::ErrorResponse),
        (status = 422, description = "Constraint violations", body = arguehub_auth_api::ErrorResponse)
    )
)]
pub async fn validate_shape(
    Path(shape): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<AppResponse<ValidatedPayload>, AppError> {
    let kind: ShapeKind = shape.parse()?;
    let Json(value) = payload?;

    let validated = validate_payload(kind, &value)?;
    tracing::debug!(shape = %kind, "Payload validated");

    Ok(AppResponse::ok(validated))
}
