use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use wordtrail::StoreError;
use wordtrail_access::AccessError;

/// A custom error type for the server application.
///
/// This enum encapsulates the failure taxonomy of the API, allowing every
/// handler-level error to be converted into an appropriate HTTP response
/// with a short message. Internal details are logged, never returned.
pub enum AppError {
    /// Missing or malformed input.
    Validation(String),
    /// Duplicate username/email. The API contract reports this as a 400.
    Conflict(String),
    /// Bad credentials or an invalid/expired/missing token.
    Unauthorized(String),
    /// Reserved: absent topics currently yield empty sequences instead.
    #[allow(dead_code)]
    NotFound(String),
    /// Errors from the identity crate.
    Access(AccessError),
    /// Errors from the storage layer.
    Store(StoreError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        AppError::Access(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Access(err) => match err {
                AccessError::Conflict => (StatusCode::BAD_REQUEST, err.to_string()),
                AccessError::InvalidCredentials | AccessError::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, err.to_string())
                }
                other => {
                    error!("Access error: {other:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal server error occurred.".to_string(),
                    )
                }
            },
            AppError::Store(err) => {
                error!("Storage error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status_code, body).into_response()
    }
}
