use arguehub_auth_api::Shape;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use crate::error::AppError;

/// JSON extractor that only yields payloads satisfying the shape's rule table.
///
/// The body is parsed as untyped JSON first, so a missing field or a wrong
/// type is reported as a violation instead of a deserialization error.
/// Rejects with [`AppError::Validation`] (422) before the handler runs.
#[must_use]
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Shape + Send + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<Value> as FromRequest<S>>::from_request(req, state).await?;

        let payload = T::from_value(&value)?;
        tracing::debug!(shape = %T::KIND, "Request payload validated");

        Ok(Self(payload))
    }
}
