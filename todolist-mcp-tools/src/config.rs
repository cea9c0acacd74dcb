//! Connection settings for the remote TodoList API

use crate::error::{Result, TodolistError};
use reqwest::Url;

/// Default base URL of the Hexschool TodoList API.
pub const DEFAULT_API_URL: &str = "https://todolist-api.hexschool.io";

/// Settings shared by every tool invocation.
///
/// Built once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at `base_url`.
    ///
    /// The URL must be absolute and use `http` or `https`. A trailing slash is
    /// dropped so endpoint paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| TodolistError::invalid_base_url(base_url, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(TodolistError::invalid_base_url(
                    base_url,
                    format!("unsupported scheme '{other}'"),
                ))
            }
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (starting with `/`) onto the base URL
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hexschool() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(
            config.endpoint_url("/todos"),
            "https://todolist-api.hexschool.io/todos"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(
            config.endpoint_url("/users/sign_in"),
            "http://127.0.0.1:8080/users/sign_in"
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        let error = ApiConfig::new("todolist-api.hexschool.io").unwrap_err();
        assert!(matches!(error, TodolistError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let error = ApiConfig::new("ftp://example.com").unwrap_err();
        assert!(error.to_string().contains("unsupported scheme 'ftp'"));
    }
}
