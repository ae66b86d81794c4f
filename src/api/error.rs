//! Client Error Types
//!
//! Failures the client can hit while talking to the expense API. The variants
//! follow the three ways a request can go wrong: the request never completed,
//! the server answered with a non-success status, or the answer could not be
//! read as the expected JSON.

use serde::Deserialize;
use thiserror::Error;

/// Result alias for API operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`ExpenseApi`](super::ExpenseApi) implementations and
/// the controller's refresh steps
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Network or transport failure (connection refused, timeout, aborted body)
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Build a status error from the raw response body.
    ///
    /// The expense API reports failures as `{"error": "..."}`; when the body
    /// has that shape only the message is kept, otherwise the raw text is.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };

        ClientError::Status { status, message }
    }

    /// Short text suitable for an inline banner or toast
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => "Could not reach the expense server".to_string(),
            ClientError::Status { status, message } => format!("Request failed ({status}): {message}"),
            ClientError::Malformed(_) => "The expense server sent an unexpected response".to_string(),
        }
    }
}

/// Error body sent by the expense API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_unpacks_api_message() {
        let error = ClientError::from_status(401, r#"{"error": "Unauthorized"}"#);

        assert_eq!(
            error,
            ClientError::Status {
                status: 401,
                message: "Unauthorized".to_string()
            }
        );
    }

    #[test]
    fn test_status_error_keeps_plain_text_body() {
        let error = ClientError::from_status(502, "Bad Gateway\n");

        assert_eq!(error.to_string(), "API error 502: Bad Gateway");
    }

    #[test]
    fn test_status_error_with_empty_body() {
        let error = ClientError::from_status(500, "");

        assert_eq!(error.user_message(), "Request failed (500): Unknown error");
    }
}
