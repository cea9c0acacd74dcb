//! MCP server implementation for the TodoList tools

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use crate::api::TodolistClient;
use crate::config::ApiConfig;
use crate::error::Result;

use super::tool_registry::{register_todo_tools, register_user_tools, ToolContext, ToolRegistry};

/// Name reported to clients during initialization
pub const SERVER_NAME: &str = "hexschool-todolist";

const SERVER_INSTRUCTIONS: &str = "Tools for the Hexschool TodoList API. \
Call hexschool_todolist_sign_in first and pass the returned token to the other tools.";

/// MCP server exposing the TodoList API as tools
///
/// Cheap to clone; clones share the same registry and HTTP client. Construct
/// one per process and hand it to a transport.
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server talking to the API described by `config`
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = TodolistClient::new(config)?;
        Ok(Self::with_client(client))
    }

    /// Create a server around an existing client
    pub fn with_client(client: TodolistClient) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_user_tools(&mut tool_registry);
        register_todo_tools(&mut tool_registry);

        tracing::debug!(
            "Registered {} tools against {}",
            tool_registry.len(),
            client.config().base_url()
        );

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(Arc::new(client))),
        }
    }

    /// Descriptors for every registered tool, sorted by name
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Names of every registered tool, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// Validate and run one tool call.
    ///
    /// Unknown tools and schema violations are protocol errors. Anything that
    /// goes wrong talking to the API comes back as an error-flagged result.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let tool = self.tool_registry.get_tool(name).ok_or_else(|| {
            tracing::error!("Unknown tool requested: {}", name);
            McpError::invalid_request(format!("Unknown tool: {name}"), None)
        })?;

        if let Err(error) = self.tool_registry.validate_arguments(name, &arguments) {
            tracing::warn!("Rejected arguments for {}: {}", name, error.message);
            return Err(error);
        }

        tracing::info!("Executing tool: {}", name);
        let result = tool.execute(arguments, &self.tool_context).await;
        tracing::debug!("Tool execution result for {}: {:?}", name, result);
        result
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        self.execute_tool(&request.name, arguments).await
    }

    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.into();
        info.server_info.version = crate::VERSION.into();
        info.server_info.title = Some("Hexschool TodoList".into());
        info.instructions = Some(SERVER_INSTRUCTIONS.into());
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(ApiConfig::default()).unwrap()
    }

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_server_registers_nine_tools() {
        let server = test_server();
        assert_eq!(
            server.list_tool_names(),
            vec![
                "hexschool_todolist_checkout",
                "hexschool_todolist_create_todo",
                "hexschool_todolist_delete_todo",
                "hexschool_todolist_get_todos",
                "hexschool_todolist_sign_in",
                "hexschool_todolist_sign_out",
                "hexschool_todolist_sign_up",
                "hexschool_todolist_update_todo",
                "hexschool_todolist_update_todo_status",
            ]
        );
    }

    #[test]
    fn test_every_tool_has_description_and_schema() {
        for tool in test_server().list_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.trim().is_empty(), "{} lacks a description", tool.name);
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "{} schema should be an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let info = test_server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, crate::VERSION);
        assert_eq!(info.server_info.title.as_deref(), Some("Hexschool TodoList"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.capabilities.resources.is_none());
        assert!(info.instructions.unwrap().contains("sign_in"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_request() {
        let error = test_server()
            .execute_tool("hexschool_todolist_nope", serde_json::Map::new())
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
        assert!(error.message.contains("hexschool_todolist_nope"));
    }

    #[tokio::test]
    async fn test_missing_argument_is_invalid_params() {
        let error = test_server()
            .execute_tool(
                "hexschool_todolist_sign_in",
                args(json!({"email": "a@b.co"})),
            )
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("password"));
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_invalid_params() {
        let error = test_server()
            .execute_tool("hexschool_todolist_get_todos", args(json!({"token": 42})))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_invalid_email_is_invalid_params() {
        let error = test_server()
            .execute_tool(
                "hexschool_todolist_sign_up",
                args(json!({
                    "email": "not-an-email",
                    "password": "secret",
                    "nickname": "nick"
                })),
            )
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }
}
