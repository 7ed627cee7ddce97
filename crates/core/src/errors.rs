//! Core error types for the SpendZen client.
//!
//! Transport-specific errors (reqwest, serde_json) are converted into these
//! types by the connect layer, so callers only ever match on this taxonomy.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Request cancelled: {0}")]
    Cancelled(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures talking to the backend.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The backend answered with a non-2xx status.
    #[error("Failed to {operation} (HTTP {status}){}", body_suffix(.body))]
    Request {
        operation: String,
        status: u16,
        body: Option<String>,
    },

    /// The request never produced a response.
    #[error("Failed to {operation}: {message}")]
    Transport { operation: String, message: String },

    /// The body was not JSON or lacked the expected payload.
    #[error("Malformed response for {operation}: {message}")]
    MalformedResponse { operation: String, message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(": {}", b))
        .unwrap_or_default()
}

impl RemoteError {
    /// HTTP status of a rejected request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_includes_body() {
        let err = Error::from(RemoteError::Request {
            operation: "save user".to_string(),
            status: 500,
            body: Some("duplicate email".to_string()),
        });
        assert_eq!(
            err.to_string(),
            "Failed to save user (HTTP 500): duplicate email"
        );
    }

    #[test]
    fn test_request_error_without_body_is_generic() {
        let err = RemoteError::Request {
            operation: "check user status".to_string(),
            status: 404,
            body: None,
        };
        assert_eq!(err.to_string(), "Failed to check user status (HTTP 404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = RemoteError::Transport {
            operation: "fetch user".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
