//! CLI definition for the todolist-mcp command-line interface.

use clap::{Parser, Subcommand};
use todolist_mcp_tools::DEFAULT_API_URL;

/// todolist-mcp - MCP server for the Hexschool TodoList API.
///
/// Exposes account and todo operations of the TodoList API as MCP tools.
/// With no subcommand the server speaks MCP over stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "todolist-mcp")]
#[command(version)]
#[command(about = "MCP server for the Hexschool TodoList API")]
#[command(
    long_about = "todolist-mcp exposes the Hexschool TodoList API as Model Context Protocol tools.\n\n\
    Agents sign up or sign in, then pass the returned token to the todo tools.\n\
    With no subcommand the server speaks MCP over stdin/stdout; logs go to stderr.\n\n\
    Environment variables:\n  \
    RUST_LOG  Override the log filter (ignored with --debug)"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Base URL of the TodoList API
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, `serve` over stdio when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve MCP over stdio (default) or HTTP
    Serve {
        /// Serve streamable HTTP on 127.0.0.1 instead of stdio
        #[arg(long)]
        http: bool,
        /// Port for --http; a free port is chosen when omitted
        #[arg(long, requires = "http")]
        port: Option<u16>,
    },

    /// List the registered tools and exit
    Tools {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve {
            http: false,
            port: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_serves_stdio() {
        let cli = Cli::parse_from(["todolist-mcp"]);
        assert!(!cli.debug);
        assert_eq!(cli.api_url, DEFAULT_API_URL);
        assert_eq!(
            cli.command_or_default(),
            Commands::Serve {
                http: false,
                port: None
            }
        );
    }

    #[test]
    fn test_serve_http_with_port() {
        let cli = Cli::parse_from(["todolist-mcp", "serve", "--http", "--port", "8080"]);
        assert_eq!(
            cli.command_or_default(),
            Commands::Serve {
                http: true,
                port: Some(8080)
            }
        );
    }

    #[test]
    fn test_port_requires_http() {
        let result = Cli::try_parse_from(["todolist-mcp", "serve", "--port", "8080"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "todolist-mcp",
            "tools",
            "--json",
            "--debug",
            "--api-url",
            "http://localhost:3000",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.api_url, "http://localhost:3000");
        assert_eq!(cli.command_or_default(), Commands::Tools { json: true });
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        let command = Cli::command();
        assert_eq!(command.get_name(), "todolist-mcp");
        command.debug_assert();
    }
}
