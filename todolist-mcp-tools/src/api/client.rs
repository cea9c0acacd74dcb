//! HTTP client for the TodoList API.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{Result, TodolistError};

use super::error::{extract_error_message, ApiError, ApiResult};
use super::request::ApiRequest;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("todolist-mcp/", env!("CARGO_PKG_VERSION"));

/// Client for the TodoList API.
///
/// Holds no per-user state: the token travels with each [`ApiRequest`]. The
/// underlying connection pool is shared, so one client serves all concurrent
/// tool calls.
#[derive(Debug, Clone)]
pub struct TodolistClient {
    client: Client,
    config: ApiConfig,
}

impl TodolistClient {
    /// Create a client for the configured API.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TodolistError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one request and decode the JSON response.
    ///
    /// Exactly one HTTP request is made; there are no retries.
    pub async fn send(&self, request: &ApiRequest) -> ApiResult {
        let url = self.config.endpoint_url(request.path());
        tracing::debug!("{} {}", request.method(), url);

        let mut builder = self.client.request(request.method().clone(), &url);
        if let Some(token) = request.token() {
            builder = builder.header(AUTHORIZATION, token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::check_response(response).await
    }

    /// Map an HTTP response to the decoded body or an [`ApiError`].
    async fn check_response(response: reqwest::Response) -> ApiResult {
        let status = response.status();
        let status_code = status.as_u16();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            tracing::debug!("API responded {}: {:?}", status_code, message);
            return Err(ApiError::from_status(status_code, message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
            status: status_code,
            reason: e.to_string(),
        })
    }
}
