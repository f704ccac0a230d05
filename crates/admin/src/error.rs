//! Unified error handling with Sentry integration.
//!
//! Most write failures never reach this type: form handlers catch the
//! store error and re-render the form with the backend's message so the
//! operator's input survives. `AppError` covers the rest - broken
//! editor loads, failed deletes, multipart decoding - and guarantees
//! every one of them reaches a terminal, visible response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use arcline_store::StoreError;

/// Application-level error type for the back office.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side faults to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, message) = match &self {
            Self::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, "Record not found".to_string())
            }
            Self::Store(StoreError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "The backend did not answer in time. Try again.".to_string(),
            ),
            Self::Store(error) => (StatusCode::BAD_GATEWAY, error.to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_load_failures_reach_a_terminal_status() {
        // A timed-out single-record fetch must become a response, not an
        // endless loading state.
        let response = AppError::Store(StoreError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let response = AppError::Store(StoreError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_requests_are_not_captured_as_server_faults() {
        let response = AppError::BadRequest("broken multipart".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
