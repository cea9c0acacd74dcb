//! List todos

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{json, plain, ReplyFormat};
use crate::mcp::tools::token_schema;
use crate::mcp::types::TokenRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat = ReplyFormat::new("取得 Todo 失敗", &[plain("status"), json("data")]);

/// MCP tool for listing the signed-in user's todos
#[derive(Default)]
pub struct ListTodoTool;

impl ListTodoTool {
    /// Creates a new instance of the ListTodoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListTodoTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_get_todos"
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
        let call = ApiRequest::get("/todos").with_token(request.token);
        Ok(context.call_api(&call, &REPLY).await)
    }
}
