/// Error handling for the API server
///
/// One error type covers the whole HTTP surface. Handlers return
/// `ApiResult<T>` and the `IntoResponse` impl maps the error to a
/// response:
///
/// - `Forbidden` becomes a bare 403 with an empty body. Wrong
///   credentials, unknown accounts, and missing reset tickets all land
///   here so the caller cannot tell them apart.
/// - `Internal` becomes a 500 with a `{ "message": ... }` body carrying
///   the upstream failure's message.
///
/// Collaborator errors (store, hashing, token signing, mail delivery)
/// convert into `Internal` via `From`.

use crate::{
    auth::{password::PasswordError, token::TokenError},
    mail::MailError,
    store::StoreError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Authentication or reset-ticket lookup rejected (403, empty body)
    Forbidden,

    /// Any other failure (500, message surfaced in the body)
    Internal(String),
}

/// Body shape of a 500 response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The upstream failure's message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Forbidden => write!(f, "Forbidden"),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Forbidden.to_string(), "Forbidden");

        let err = ApiError::Internal("connection refused".to_string());
        assert_eq!(err.to_string(), "Internal error: connection refused");
    }

    #[tokio::test]
    async fn test_forbidden_response_has_empty_body() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_internal_response_carries_message() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.message, "boom");
    }
}
