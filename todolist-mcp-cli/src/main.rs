//! todolist-mcp - MCP server for the Hexschool TodoList API.
//!
//! Commands:
//! - `todolist-mcp`: Serve MCP over stdio (same as `todolist-mcp serve`)
//! - `todolist-mcp serve --http [--port <PORT>]`: Serve streamable HTTP on 127.0.0.1
//! - `todolist-mcp tools [--json]`: List the registered tools
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::Context;
use clap::Parser;

use todolist_mcp::{logging, serve, tools};
use todolist_mcp::{Cli, Commands};
use todolist_mcp_tools::{ApiConfig, McpServer};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ApiConfig::new(&cli.api_url).context("invalid --api-url")?;
    let server = McpServer::new(config)?;

    match cli.command_or_default() {
        Commands::Serve { http, port } => {
            serve::run_serve(server, serve::server_mode(http, port)).await
        }
        Commands::Tools { json } => tools::run_tools(&server, json),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
