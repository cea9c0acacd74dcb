//! Sign in; the returned token authenticates every other tool

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::types::SignInRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

const REPLY: ReplyFormat =
    ReplyFormat::new("登入失敗", &[plain("status"), plain("exp"), plain("token")]);

/// MCP tool for signing in and obtaining a token
#[derive(Default)]
pub struct SignInTool;

impl SignInTool {
    /// Creates a new instance of the SignInTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SignInTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_sign_in"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "format": "email",
                    "description": "Account email"
                },
                "password": {
                    "type": "string",
                    "description": "Account password"
                }
            },
            "required": ["email", "password"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SignInRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Signing in {}", request.email);

        let call = ApiRequest::post("/users/sign_in").with_json(json!({
            "email": request.email,
            "password": request.password,
        }));

        Ok(context.call_api(&call, &REPLY).await)
    }
}
