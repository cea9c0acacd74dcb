//! Sign out

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::tools::token_schema;
use crate::mcp::types::TokenRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat = ReplyFormat::new("登出失敗", &[plain("status"), plain("message")]);

/// MCP tool for signing out
#[derive(Default)]
pub struct SignOutTool;

impl SignOutTool {
    /// Creates a new instance of the SignOutTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SignOutTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_sign_out"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        token_schema()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: TokenRequest = BaseToolImpl::parse_arguments(arguments)?;
        let call = ApiRequest::post("/users/sign_out")
            .with_token(request.token)
            .with_empty_body();
        Ok(context.call_api(&call, &REPLY).await)
    }
}
