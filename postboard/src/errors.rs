use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// ============================================================================
// CLIENT ERRORS - What the controller can surface to the user
// ============================================================================

/// The remote call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown when the server answers with a non-success status.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch posts",
            Operation::Create => "Failed to create post",
            Operation::Update => "Failed to update post",
            Operation::Delete => "Failed to delete post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// The single failure kind of the client: the request did not succeed.
///
/// `status` is set when the server answered, `None` for transport and
/// decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailed {
    pub operation: Operation,
    pub status: Option<u16>,
    pub message: String,
}

impl RequestFailed {
    pub fn status(operation: Operation, status: u16) -> Self {
        Self {
            operation,
            status: Some(status),
            message: operation.failure_message().to_string(),
        }
    }

    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        Self {
            operation,
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<(Operation, reqwest::Error)> for RequestFailed {
    fn from((operation, err): (Operation, reqwest::Error)) -> Self {
        match err.status() {
            Some(status) => RequestFailed::status(operation, status.as_u16()),
            None => RequestFailed::transport(operation, err),
        }
    }
}

/// Rejected form input. Never sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}", FormError::INCOMPLETE_MESSAGE)]
    Incomplete,
}

impl FormError {
    pub const INCOMPLETE_MESSAGE: &'static str = "Please fill in all fields";
}

/// Every id above the largest local one is taken, so a new post cannot be
/// numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No id left for a new post")]
pub struct IdsExhausted;

// ============================================================================
// SERVER ERRORS - Responses of the local stand-in API
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    ValidationError(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::ValidationError(msg) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "error": msg
                    })),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_use_the_operation_message() {
        let err = RequestFailed::status(Operation::Update, 500);
        assert_eq!(err.to_string(), "Failed to update post");
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn transport_failures_keep_the_underlying_message() {
        let err = RequestFailed::transport(Operation::Fetch, "connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status, None);
    }
}
