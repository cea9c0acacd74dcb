//! Toggle a todo between done and not done

use crate::api::request::todo_path;
use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::tools::todo_id_schema;
use crate::mcp::types::TodoIdRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat =
    ReplyFormat::new("更新 Todo 狀態失敗", &[plain("status"), plain("message")]);

/// MCP tool for toggling a todo's completion state
#[derive(Default)]
pub struct ToggleTodoTool;

impl ToggleTodoTool {
    /// Creates a new instance of the ToggleTodoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ToggleTodoTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_update_todo_status"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        todo_id_schema()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: TodoIdRequest = BaseToolImpl::parse_arguments(arguments)?;
        let path = format!("{}/toggle", todo_path(&request.todo_id));
        let call = ApiRequest::patch(path)
            .with_token(request.token)
            .with_empty_body();
        Ok(context.call_api(&call, &REPLY).await)
    }
}
