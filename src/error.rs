//! Error types for the Jira Service Desk client.
//!
//! This module defines `ServiceDeskError`, the unified error type returned
//! by every fallible operation in the crate.
//!
//! HTTP responses with an error status (4xx/5xx) are *not* represented here.
//! They come back as ordinary [`Response`](crate::response::Response)
//! envelopes so callers can inspect the status and body themselves.
//!
//! # Security
//!
//! Error messages built from transport failures can echo request details.
//! Use `sanitize_message()` before logging them so the password never leaks.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum ServiceDeskError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request never produced an HTTP response (DNS, connect, TLS or
    /// body read failure).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Input validation failed, including incomplete request descriptors.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Typed decoding was requested but the response carried no JSON body.
    #[error("response body is empty or not JSON (HTTP {status})")]
    MissingBody {
        /// Status of the response that had no body.
        status: u16,
    },

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl ServiceDeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ServiceDeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ServiceDeskError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceDeskError::Validation(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        ServiceDeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        ServiceDeskError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns true if the call failed before an HTTP response was received.
    ///
    /// Transport failures are fatal to the call and never retried by the
    /// client. An HTTP error status is not a transport failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ServiceDeskError::Transport(_) | ServiceDeskError::Timeout { .. }
        )
    }

    /// Returns true if this is a connection-refused style failure.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        match self {
            ServiceDeskError::Transport(e) => e.is_connect(),
            _ => false,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the password.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `secret` - The secret to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the secret replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = ServiceDeskError::missing_env("JSD_PASSWORD");
        assert!(err.to_string().contains("JSD_PASSWORD"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceDeskError::validation("request method not set");
        assert_eq!(err.to_string(), "validation error: request method not set");
    }

    #[test]
    fn test_timeout_error() {
        let err = ServiceDeskError::timeout(Duration::from_secs(30), "GET info");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = ServiceDeskError::timeout(Duration::from_secs(1), "GET info");
        assert!(err.is_transport());
        assert!(!err.is_connect());
    }

    #[test]
    fn test_validation_is_not_transport() {
        assert!(!ServiceDeskError::validation("bad").is_transport());
        assert!(!ServiceDeskError::MissingBody { status: 204 }.is_transport());
    }

    #[test]
    fn test_missing_body_mentions_status() {
        let err = ServiceDeskError::MissingBody { status: 204 };
        assert!(err.to_string().contains("204"));
    }

    #[test]
    fn test_sanitize_message_removes_password() {
        let password = "hunter2-secret";
        let message = format!("failed to connect as admin:{}", password);
        let sanitized = ServiceDeskError::sanitize_message(&message, password);
        assert!(!sanitized.contains(password));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        let sanitized = ServiceDeskError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_connection_test_error() {
        let err = ServiceDeskError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
