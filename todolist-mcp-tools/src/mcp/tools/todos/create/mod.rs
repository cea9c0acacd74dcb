//! Create a todo

use crate::api::ApiRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::reply::{json, plain, ReplyFormat};
use crate::mcp::types::CreateTodoRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

const REPLY: ReplyFormat =
    ReplyFormat::new("新增 Todo 失敗", &[plain("status"), json("newTodo")]);

/// MCP tool for creating a todo
#[derive(Default)]
pub struct CreateTodoTool;

impl CreateTodoTool {
    /// Creates a new instance of the CreateTodoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateTodoTool {
    fn name(&self) -> &'static str {
        "hexschool_todolist_create_todo"
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
                "content": {
                    "type": "string",
                    "description": "Todo text"
                }
            },
            "required": ["token", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateTodoRequest = BaseToolImpl::parse_arguments(arguments)?;
        let call = ApiRequest::post("/todos")
            .with_token(request.token)
            .with_json(serde_json::json!({ "content": request.content }));
        Ok(context.call_api(&call, &REPLY).await)
    }
}
