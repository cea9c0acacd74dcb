//! Token check

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::tools::token_schema;
use crate::mcp::types::TokenRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat = ReplyFormat::new("檢查失敗", &[plain("status"), plain("uid")]);

/// MCP tool for checking whether a token is still valid
#[derive(Default)]
pub struct CheckoutTool;

impl CheckoutTool {
    /// Creates a new instance of the CheckoutTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CheckoutTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_checkout"
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
        let call = ApiRequest::get("/users/checkout").with_token(request.token);
        Ok(context.call_api(&call, &REPLY).await)
    }
}
