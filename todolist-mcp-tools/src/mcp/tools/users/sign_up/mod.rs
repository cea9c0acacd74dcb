//! Account registration

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::types::SignUpRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

const REPLY: ReplyFormat = ReplyFormat::new("註冊失敗", &[plain("status"), plain("uid")]);

/// MCP tool for registering an account
#[derive(Default)]
pub struct SignUpTool;

impl SignUpTool {
    /// Creates a new instance of the SignUpTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SignUpTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_sign_up"
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
                },
                "nickname": {
                    "type": "string",
                    "description": "Display name"
                }
            },
            "required": ["email", "password", "nickname"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SignUpRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Signing up {}", request.email);

        let call = ApiRequest::post("/users/sign_up").with_json(json!({
            "email": request.email,
            "password": request.password,
            "nickname": request.nickname,
        }));

        Ok(context.call_api(&call, &REPLY).await)
    }
}
