//! Command-line front end for the TodoList MCP server.

pub mod cli;
pub mod logging;
pub mod serve;
pub mod table;
pub mod tools;

pub use cli::{Cli, Commands};
