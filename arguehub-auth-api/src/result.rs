use serde::{Deserialize, Serialize};

/// HTTP status codes used by the validation service
/// This is WASM-compatible and doesn't depend on axum::http::StatusCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    PayloadTooLarge = 413,
    UnprocessableEntity = 422,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Generic API response wrapper
///
/// This type is WASM-compatible and can be used in both backend and frontend.
/// The backend wraps this in a type that implements Axum's IntoResponse trait.
///
/// # Examples
///
/// ```rust
/// use arguehub_auth_api::{AppResponse, StatusCode};
///
/// let response = AppResponse::ok("data");
/// assert_eq!(response.status, StatusCode::Ok);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    /// Creates a new response with a status code and data
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    struct TestData {
        message: String,
    }

    #[test]
    fn test_ok_response() {
        let data = TestData {
            message: "success".to_string(),
        };
        let response = AppResponse::ok(data.clone());
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(response.data, Some(data));
    }

    #[test]
    fn test_status_numbers() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::UnprocessableEntity.as_u16(), 422);
    }

    #[test]
    fn test_serialization() {
        let data = TestData {
            message: "test".to_string(),
        };
        let response = AppResponse::ok(data);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "Ok", "data": { "message": "test" } })
        );
    }
}
