//! Error types for account lookups.
//!
//! Provides structured error classification so the engine can collapse
//! every failure into one UI state while keeping the cause for display.

use thiserror::Error;

/// Errors that can occur while fetching a profile or its repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Could not reach the service (DNS, refused, reset)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request exceeded the gateway timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service has no account with this identifier
    #[error("Account '{identifier}' not found")]
    NotFound { identifier: String },

    /// The service answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Coarse failure category surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No usable connection to the service.
    Transport,
    /// The identifier does not exist.
    NotFound,
    /// The service rejected or garbled the request.
    Request,
}

impl FetchError {
    /// Map error variant to its failure category
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Connection(_) => FailureKind::Transport,
            FetchError::Timeout { .. } => FailureKind::Transport,
            FetchError::NotFound { .. } => FailureKind::NotFound,
            FetchError::Upstream { .. } => FailureKind::Request,
            FetchError::Decode(_) => FailureKind::Request,
        }
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Connection(_) => "connection_error",
            FetchError::Timeout { .. } => "request_timeout",
            FetchError::NotFound { .. } => "not_found",
            FetchError::Upstream { .. } => "upstream_error",
            FetchError::Decode(_) => "decode_error",
        }
    }
}

impl FailureKind {
    /// Short user-facing description.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureKind::Transport => "Could not reach the server",
            FailureKind::NotFound => "No account with that name",
            FailureKind::Request => "The server rejected the request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_kinds() {
        let err = FetchError::Connection("refused".to_string());
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.error_type(), "connection_error");

        let err = FetchError::Timeout { duration: 30 };
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.to_string(), "Request timeout after 30s");
    }

    #[test]
    fn test_not_found_kind() {
        let err = FetchError::NotFound {
            identifier: "ghost".to_string(),
        };
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(err.to_string(), "Account 'ghost' not found");
    }

    #[test]
    fn test_request_kinds() {
        let err = FetchError::Upstream {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.kind(), FailureKind::Request);
        assert_eq!(FetchError::Decode("eof".to_string()).kind(), FailureKind::Request);
    }
}
