//! Replace a todo's content

use crate::api::request::todo_path;
use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{plain, ReplyFormat};
use crate::mcp::types::UpdateTodoRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat =
    ReplyFormat::new("更新 Todo 失敗", &[plain("status"), plain("message")]);

/// MCP tool for replacing a todo's text
#[derive(Default)]
pub struct UpdateTodoTool;

impl UpdateTodoTool {
    /// Creates a new instance of the UpdateTodoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateTodoTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_update_todo"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "token": {
                    "type": "string",
                    "description": "Token returned by hexschool_todolist_sign_in"
                },
                "todoId": {
                    "type": "string",
                    "description": "Identifier of the todo"
                },
                "content": {
                    "type": "string",
                    "description": "New todo text"
                }
            },
            "required": ["token", "todoId", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateTodoRequest = BaseToolImpl::parse_arguments(arguments)?;
        let call = ApiRequest::put(todo_path(&request.todo_id))
            .with_token(request.token)
            .with_json(serde_json::json!({ "content": request.content }));
        Ok(context.call_api(&call, &REPLY).await)
    }
}
