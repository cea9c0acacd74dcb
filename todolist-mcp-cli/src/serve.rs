//! `todolist-mcp serve` - run the MCP server until the transport closes.

use anyhow::Context;
use todolist_mcp_tools::{start_mcp_server, McpServer, McpServerMode};

/// Transport mode for the serve flags
pub fn server_mode(http: bool, port: Option<u16>) -> McpServerMode {
    if http {
        McpServerMode::Http { port }
    } else {
        McpServerMode::Stdio
    }
}

/// Run the serve command.
///
/// Returns when the client disconnects (stdio) or on Ctrl-C.
pub async fn run_serve(server: McpServer, mode: McpServerMode) -> anyhow::Result<()> {
    tracing::info!("六角學院 TodoList MCP Server 啟動中...");

    let mut handle = start_mcp_server(mode, server)
        .await
        .context("failed to start MCP server")?;
    tracing::info!("MCP server listening on {}", handle.url());

    let interrupted = tokio::select! {
        finished = handle.wait() => {
            finished?;
            false
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            true
        }
    };

    if interrupted {
        tracing::info!("Received Ctrl-C, shutting down");
        handle.shutdown().await?;
        handle.wait().await?;
    }

    tracing::info!("MCP server stopped");
    Ok(())
}
