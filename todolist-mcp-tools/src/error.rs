//! Error types for the TodoList MCP server
//!
//! These errors cover process-level failures: bad configuration, HTTP client
//! construction and transport startup. Failures of individual remote calls
//! are modelled by [`crate::api::ApiError`] and never surface here.

use std::io;
use thiserror::Error as ThisError;

/// Result type alias for TodoList MCP operations
pub type Result<T> = std::result::Result<T, TodolistError>;

/// Startup and transport errors
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum TodolistError {
    /// The configured API base URL could not be used
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The MCP transport failed to start or terminated abnormally
    #[error("MCP transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TodolistError {
    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_display() {
        let error = TodolistError::invalid_base_url("nope", "relative URL without a base");
        assert_eq!(
            error.to_string(),
            "Invalid API base URL 'nope': relative URL without a base"
        );
    }

    #[test]
    fn test_io_conversion() {
        let error: TodolistError = io::Error::new(io::ErrorKind::AddrInUse, "busy").into();
        assert!(matches!(error, TodolistError::Io(_)));
        assert!(error.to_string().contains("busy"));
    }
}
