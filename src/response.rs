use arguehub_auth_api::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Backend wrapper for arguehub-auth-api's AppResponse that adds Axum integration.
///
/// The whole envelope (`status` + `data`) is serialized so the frontend can
/// deserialize it with the shared type.
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse<T>) -> Self {
        Self { inner }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(ApiResponse::ok(data))
    }
}

/// Converts API StatusCode to Axum's StatusCode
pub(crate) fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::NotFound => StatusCode::NOT_FOUND,
        ApiStatusCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ApiStatusCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Implements Axum's IntoResponse trait for our wrapper
impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status);
        (status, Json(self.inner)).into_response()
    }
}
