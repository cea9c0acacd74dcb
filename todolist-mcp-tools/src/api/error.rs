//! Outcome of a single remote call.

use thiserror::Error;

/// Result of one API request: the decoded JSON body or a classified failure.
pub type ApiResult = Result<serde_json::Value, ApiError>;

/// Broad classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No HTTP response was received
    Network,
    /// The API answered with a 4xx status
    Client,
    /// The API answered with a 5xx (or otherwise unexpected) status
    Server,
    /// The API answered 2xx but the body was not JSON
    InvalidResponse,
}

/// Failure of a remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// 4xx response
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Client {
        /// HTTP status code
        status: u16,
        /// The `message` field of the error body, if any
        message: Option<String>,
    },

    /// 5xx or any other non-success response
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code
        status: u16,
        /// The `message` field of the error body, if any
        message: Option<String>,
    },

    /// Success status with a body that could not be decoded
    #[error("invalid response (HTTP {status}): {reason}")]
    InvalidResponse {
        /// HTTP status code
        status: u16,
        /// Decoder error
        reason: String,
    },
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if (400..500).contains(&status) {
            Self::Client { status, message }
        } else {
            Self::Server { status, message }
        }
    }

    /// The kind of failure, without its payload
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::Client { .. } => ApiErrorKind::Client,
            Self::Server { .. } => ApiErrorKind::Server,
            Self::InvalidResponse { .. } => ApiErrorKind::InvalidResponse,
        }
    }

    /// The message supplied by the remote API, if it sent one
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Client { message, .. } | Self::Server { message, .. } => message.as_deref(),
            Self::Network(_) | Self::InvalidResponse { .. } => None,
        }
    }

    /// Text shown to the caller: the remote message when present, otherwise a
    /// generic description of the failure.
    pub fn detail(&self) -> String {
        match self {
            Self::Client { status, message } | Self::Server { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("HTTP {status}")),
            Self::Network(_) | Self::InvalidResponse { .. } => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Extract a human-readable message from a JSON error body.
///
/// Strings are returned verbatim, arrays of strings are joined with `", "`,
/// any other JSON value is serialized. Returns `None` when the body is not
/// JSON or has no `message` field.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    match json.get("message")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}
