//! Error types for embedchat-core.

use thiserror::Error;

/// Result type for embedchat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the client can run into while talking to the backend or
/// handling user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message taken from the `{"error": ...}` body when present.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sign-in failed or was refused.
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl Error {
    /// Build a [`Error::Status`] from a status code and an optional
    /// server-provided message.
    pub fn status(status: u16, message: Option<String>) -> Self {
        Error::Status {
            status,
            message: message.unwrap_or_else(|| "no details".to_string()),
        }
    }

    /// Text suitable for an alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            Error::Status { message, .. } => message.clone(),
            Error::InvalidInput(msg) | Error::Auth(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_message() {
        let err = Error::status(500, None);
        assert_eq!(err.to_string(), "Request failed with status 500: no details");
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = Error::status(403, Some("Invalid credentials".to_string()));
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = Error::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }
}
