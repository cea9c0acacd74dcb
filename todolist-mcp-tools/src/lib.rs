//! # TodoList MCP Tools
//!
//! MCP (Model Context Protocol) tools and server implementation for the
//! Hexschool TodoList API.
//!
//! Every tool maps one remote endpoint: it validates its arguments, issues a
//! single HTTP request and turns the outcome into a text result. The crate
//! provides:
//!
//! - **API Client**: [`api::TodolistClient`] sends [`api::ApiRequest`]s and
//!   returns a discriminated [`api::ApiResult`]
//! - **Tool Registry**: [`ToolRegistry`] validates arguments and dispatches calls
//! - **User Tools**: sign up, sign in, token checkout, sign out
//! - **Todo Tools**: list, create, update, delete, toggle completion
//! - **MCP Server**: [`McpServer`] plus stdio and HTTP transports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist_mcp_tools::{ApiConfig, McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new(ApiConfig::default())?;
//!
//! // Server is ready to handle MCP requests
//! println!("{} tools registered", server.list_tools().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// HTTP client for the remote TodoList API
pub mod api;

/// Connection settings for the remote API
pub mod config;

/// Error types for startup and transport failures
pub mod error;

/// Model Context Protocol (MCP) server and tools
pub mod mcp;

pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{Result, TodolistError};
pub use mcp::{start_mcp_server, McpServer, McpServerHandle, McpServerMode};
pub use mcp::{register_todo_tools, register_user_tools};
pub use mcp::{ToolContext, ToolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
