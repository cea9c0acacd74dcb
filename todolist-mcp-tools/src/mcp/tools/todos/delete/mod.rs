//! Delete a todo

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
    ReplyFormat::new("刪除 Todo 失敗", &[plain("status"), plain("message")]);

/// MCP tool for deleting a todo
#[derive(Default)]
pub struct DeleteTodoTool;

impl DeleteTodoTool {
    /// Creates a new instance of the DeleteTodoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteTodoTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_delete_todo"
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
        let call = ApiRequest::delete(todo_path(&request.todo_id)).with_token(request.token);
        Ok(context.call_api(&call, &REPLY).await)
    }
}
