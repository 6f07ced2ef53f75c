//! Error types for the sentiment client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`SentimentClient`](crate::SentimentClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request failed to send or its body could not be read.
    #[error("sentiment request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("sentiment service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON.
    #[error("sentiment response parse failed: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let err = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "malformed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("malformed"));
    }

    #[test]
    fn decode_error_displays_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::Decode(source);
        assert!(err.to_string().starts_with("sentiment response parse failed"));
    }
}
