//! Model Context Protocol (MCP) server support
//!
//! ## Architecture
//!
//! 1. **Server Layer**: [`McpServer`] handles MCP protocol messages
//! 2. **Registry Layer**: [`ToolRegistry`] validates arguments and dispatches calls
//! 3. **Tool Layer**: one tool per TodoList endpoint, see [`tools`]
//! 4. **Transport Layer**: [`start_mcp_server`] runs the server over stdio or HTTP
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist_mcp_tools::mcp::{start_mcp_server, McpServer, McpServerMode};
//! use todolist_mcp_tools::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new(ApiConfig::default())?;
//! let mut handle = start_mcp_server(McpServerMode::Stdio, server).await?;
//! handle.wait().await?;
//! # Ok(())
//! # }
//! ```

pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;
pub mod unified_server;

pub use server::McpServer;
pub use tool_registry::{register_todo_tools, register_user_tools, ToolContext, ToolRegistry};
pub use unified_server::{start_mcp_server, McpServerHandle, McpServerInfo, McpServerMode};
