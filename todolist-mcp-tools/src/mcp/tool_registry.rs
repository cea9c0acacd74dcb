//! Tool registry for MCP operations
//!
//! Every remote endpoint is exposed as one [`McpTool`]. The registry owns the
//! tools, lists them for `tools/list` and validates call arguments against
//! each tool's JSON schema before the tool runs, so malformed calls never
//! reach the network.
//!
//! # Creating New Tools
//!
//! 1. Create a struct implementing the `McpTool` trait
//! 2. Define the tool's schema using JSON Schema
//! 3. Build an [`crate::api::ApiRequest`] in `execute` and hand it to
//!    [`ToolContext::call_api`] together with the tool's reply format
//! 4. Register the tool with the appropriate registry function
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
//!
//! #[derive(Default)]
//! pub struct MyTool;
//!
//! #[async_trait]
//! impl McpTool for MyTool {
//!     fn name(&self) -> &'static str {
//!         "hexschool_todolist_my_tool"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         include_str!("description.md")
//!     }
//!
//!     fn schema(&self) -> serde_json::Value {
//!         serde_json::json!({
//!             "type": "object",
//!             "properties": {
//!                 "token": {"type": "string", "description": "Token from sign in"}
//!             },
//!             "required": ["token"]
//!         })
//!     }
//!
//!     async fn execute(
//!         &self,
//!         arguments: serde_json::Map<String, serde_json::Value>,
//!         context: &ToolContext,
//!     ) -> std::result::Result<CallToolResult, McpError> {
//!         let request: TokenRequest = BaseToolImpl::parse_arguments(arguments)?;
//!         let call = ApiRequest::get("/my/endpoint").with_token(request.token);
//!         Ok(context.call_api(&call, &MY_REPLY).await)
//!     }
//! }
//! ```

use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::ErrorData as McpError;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{ApiRequest, TodolistClient};

use super::tools::reply::ReplyFormat;

/// Context shared by all tools during execution
///
/// Holds the API client. It carries no per-user state: tokens arrive with
/// each call's arguments, so concurrent calls never interact.
#[derive(Clone)]
pub struct ToolContext {
    /// Client for the remote TodoList API
    pub client: Arc<TodolistClient>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(client: Arc<TodolistClient>) -> Self {
        Self { client }
    }

    /// Issue one API request and format its outcome as a tool result.
    ///
    /// This is the single executor every tool goes through: the request
    /// describes method, path, token and body; `reply` describes how success
    /// and failure are rendered. Remote failures become error-flagged text
    /// results, never `Err`.
    pub async fn call_api(&self, request: &ApiRequest, reply: &ReplyFormat) -> CallToolResult {
        match self.client.send(request).await {
            Ok(body) => BaseToolImpl::create_success_response(reply.success_text(&body)),
            Err(error) => {
                tracing::warn!(
                    "{} {} failed ({:?}): {}",
                    request.method(),
                    request.path(),
                    error.kind(),
                    error
                );
                BaseToolImpl::create_error_response(reply.failure_text(&error))
            }
        }
    }
}

/// Trait defining the interface for all MCP tools
///
/// Tools are stateless and must be `Send + Sync`; everything they need comes
/// from the arguments and the [`ToolContext`].
///
/// Tool names follow the `hexschool_todolist_{action}` pattern and must stay
/// stable across versions, since agents refer to them by name.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's unique identifier name
    fn name(&self) -> &'static str;

    /// Get the tool's human-readable description
    ///
    /// Loaded from a `description.md` next to the tool.
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for argument validation
    ///
    /// The registry validates every call against this schema, including
    /// `format` keywords such as `"email"`.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    ///
    /// Arguments have already passed schema validation. Implementations parse
    /// them with [`BaseToolImpl::parse_arguments`], build one request and
    /// return the result of [`ToolContext::call_api`].
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// A registered tool next to its compiled argument validator
struct RegisteredTool {
    tool: Box<dyn McpTool>,
    /// Compiled once at registration; `Err` holds the reason the schema was rejected
    validator: std::result::Result<jsonschema::Validator, String>,
}

/// Registry for managing MCP tools
///
/// Filled once at startup and read-only afterwards, so it can be shared
/// behind an `Arc` without locking.
#[derive(Default)]
pub struct ToolRegistry {
    /// Internal storage mapping tool names to tools and their validators
    tools: HashMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    ///
    /// The tool's schema is compiled here, once. A tool registered under an
    /// existing name replaces the previous one.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        let validator = BaseToolImpl::compile_schema(&tool.schema());
        if let Err(message) = &validator {
            tracing::error!("Tool '{}' has an unusable schema: {}", name, message);
        }
        let entry = RegisteredTool {
            tool: Box::new(tool),
            validator,
        };
        if self.tools.insert(name.clone(), entry).is_some() {
            tracing::warn!("Tool '{}' registered twice; keeping the latest", name);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|entry| entry.tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    ///
    /// Sorted by name so listings are stable between calls.
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .values()
            .map(|entry| {
                let tool = entry.tool.as_ref();
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate call arguments against the named tool's schema
    ///
    /// Returns an `invalid_params` error listing every violation, or
    /// `invalid_request` if the tool is unknown.
    pub fn validate_arguments(
        &self,
        name: &str,
        arguments: &serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<(), McpError> {
        let entry = self
            .tools
            .get(name)
            .ok_or_else(|| McpError::invalid_request(format!("Unknown tool: {name}"), None))?;
        entry
            .validator
            .as_ref()
            .map_err(Clone::clone)
            .and_then(|validator| BaseToolImpl::check_arguments(validator, arguments))
            .map_err(|message| {
                McpError::invalid_params(format!("Invalid arguments for {name}: {message}"), None)
            })
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Compile a tool's JSON schema with format validation enabled
    pub fn compile_schema(
        schema: &serde_json::Value,
    ) -> std::result::Result<jsonschema::Validator, String> {
        jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| format!("tool schema is invalid: {e}"))
    }

    /// Check `arguments` against a compiled schema
    ///
    /// Returns every violation joined into one message.
    pub fn check_arguments(
        validator: &jsonschema::Validator,
        arguments: &serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<(), String> {
        let instance = serde_json::Value::Object(arguments.clone());
        let violations: Vec<String> = validator
            .iter_errors(&instance)
            .map(|error| error.to_string())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.join("; "))
        }
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Content::text(content.into())])
    }

    /// Create an error-flagged response with text content
    pub fn create_error_response<T: Into<String>>(error: T) -> CallToolResult {
        CallToolResult::error(vec![Content::text(error.into())])
    }
}

/// Register all user account tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    use super::tools::users;
    users::register_user_tools(registry);
}

/// Register all todo item tools with the registry
pub fn register_todo_tools(registry: &mut ToolRegistry) {
    use super::tools::todos;
    todos::register_todo_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockTool {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "A mock tool for testing"
        }

        fn schema(&self) -> serde_json::Value {
            json!({
                "type": "object",
                "properties": {
                    "email": {"type": "string", "format": "email"},
                    "token": {"type": "string"}
                },
                "required": ["email", "token"]
            })
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response("ok"))
        }
    }

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_registry_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(MockTool { name: "mock_b" });
        registry.register(MockTool { name: "mock_a" });

        assert_eq!(registry.len(), 2);
        assert!(registry.get_tool("mock_a").is_some());
        assert!(registry.get_tool("missing").is_none());
        assert_eq!(registry.list_tool_names(), vec!["mock_a", "mock_b"]);
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock" });
        registry.register(MockTool { name: "mock" });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_tools_is_sorted_and_carries_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "zeta" });
        registry.register(MockTool { name: "alpha" });

        let tools = registry.list_tools();
        assert_eq!(tools[0].name, "alpha");
        assert_eq!(tools[1].name, "zeta");
        assert_eq!(tools[0].input_schema.get("type"), Some(&json!("object")));
    }

    #[test]
    fn test_validate_accepts_well_formed_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock" });

        let result = registry.validate_arguments(
            "mock",
            &args(json!({"email": "user@example.com", "token": "T"})),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock" });

        let error = registry
            .validate_arguments("mock", &args(json!({"email": "user@example.com"})))
            .unwrap_err();
        assert!(error.message.contains("token"), "{}", error.message);
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock" });

        let result = registry.validate_arguments(
            "mock",
            &args(json!({"email": "not-an-email", "token": "T"})),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock" });

        let result = registry.validate_arguments(
            "mock",
            &args(json!({"email": "user@example.com", "token": 42})),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_unknown_tool() {
        let registry = ToolRegistry::new();
        let error = registry
            .validate_arguments("missing", &serde_json::Map::new())
            .unwrap_err();
        assert!(error.message.contains("Unknown tool"));
    }

    struct CountingTool {
        schema_calls: Arc<AtomicUsize>,
        schema: serde_json::Value,
    }

    #[async_trait::async_trait]
    impl McpTool for CountingTool {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Counts schema lookups"
        }

        fn schema(&self) -> serde_json::Value {
            self.schema_calls.fetch_add(1, Ordering::SeqCst);
            self.schema.clone()
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response("ok"))
        }
    }

    #[test]
    fn test_schema_is_compiled_once_at_registration() {
        let schema_calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ToolRegistry::new();
        registry.register(CountingTool {
            schema_calls: schema_calls.clone(),
            schema: json!({
                "type": "object",
                "properties": {"token": {"type": "string"}},
                "required": ["token"]
            }),
        });
        assert_eq!(schema_calls.load(Ordering::SeqCst), 1);

        for _ in 0..3 {
            assert!(registry
                .validate_arguments("counting", &args(json!({"token": "T"})))
                .is_ok());
        }
        assert!(registry
            .validate_arguments("counting", &serde_json::Map::new())
            .is_err());
        assert_eq!(schema_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unusable_schema_rejects_every_call() {
        let mut registry = ToolRegistry::new();
        registry.register(CountingTool {
            schema_calls: Arc::new(AtomicUsize::new(0)),
            schema: json!({"type": 12}),
        });

        let error = registry
            .validate_arguments("counting", &args(json!({"token": "T"})))
            .unwrap_err();
        assert_eq!(error.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("tool schema is invalid"), "{}", error.message);
    }

    #[test]
    fn test_response_helpers_flag_errors() {
        let ok = BaseToolImpl::create_success_response("fine");
        assert_eq!(ok.is_error, Some(false));

        let err = BaseToolImpl::create_error_response("broken");
        assert_eq!(err.is_error, Some(true));
        assert_eq!(err.content[0].as_text().unwrap().text, "broken");
    }
}
