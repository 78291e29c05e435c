//! Error types and HTTP error response handling.
//!
//! All fallible paths in the application funnel into [`AppError`], which
//! knows how to render itself as a JSON error response with the right
//! HTTP status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Authentication**: missing or invalid bearer token
/// - **Authorization**: valid token, but no business set up yet
/// - **Resource**: record missing or owned by another business
/// - **Validation**: malformed request data
/// - **Store**: any underlying sqlx failure
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    ///
    /// Wraps any sqlx::Error via `#[from]`. Details are logged but never
    /// leaked to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API key is missing, malformed, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The authenticated key is not attached to a business yet.
    ///
    /// Data routes require a business scope; the caller must run business
    /// setup (or join with a shared key) first. Returns HTTP 403 Forbidden.
    #[error("No business set up for this API key")]
    BusinessNotSetup,

    /// Requested record does not exist or belongs to a different business.
    ///
    /// Foreign-owned records are deliberately reported the same way as
    /// missing ones so record IDs cannot be probed across businesses.
    /// Returns HTTP 404 Not Found.
    #[error("Record not found")]
    RecordNotFound,

    /// Request body or parameters failed validation.
    ///
    /// Returns HTTP 400 Bad Request with the validation message.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// Lets handlers return `Result<T, AppError>` and have errors rendered
/// uniformly as:
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::BusinessNotSetup => (
                StatusCode::FORBIDDEN,
                "business_not_setup",
                self.to_string(),
            ),
            AppError::RecordNotFound => {
                (StatusCode::NOT_FOUND, "record_not_found", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                // Log the real cause, hide it from the client
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
