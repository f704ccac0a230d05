//! Error types for remote store operations.

use thiserror::Error;

/// Errors from the hosted backend's row, storage, and auth APIs.
///
/// Read paths treat every variant identically (keep the fallback data);
/// write paths surface the `Api` message to the operator verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (connect, TLS, body read).
    #[error("transport error: {0}")]
    Http(reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("store API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the document we expected.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A single-row lookup matched nothing.
    #[error("row not found")]
    NotFound,
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// The row API answers `{"message": ...}`, the auth API historically
/// used `{"error_description": ...}` and now `{"msg": ...}`; anything
/// else falls back to the (truncated) raw body.
#[must_use]
pub fn extract_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error_description", "error"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }
    let truncated: String = body.chars().take(200).collect();
    if truncated.is_empty() {
        format!("HTTP {status}")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_row_api_message() {
        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(extract_message(409, body), "duplicate key value");
    }

    #[test]
    fn extracts_auth_message_variants() {
        assert_eq!(
            extract_message(400, r#"{"msg":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            extract_message(400, r#"{"error":"invalid_grant","error_description":"Bad token"}"#),
            "Bad token"
        );
    }

    #[test]
    fn falls_back_to_raw_body_then_status() {
        assert_eq!(extract_message(502, "upstream gone"), "upstream gone");
        assert_eq!(extract_message(502, ""), "HTTP 502");
    }
}
