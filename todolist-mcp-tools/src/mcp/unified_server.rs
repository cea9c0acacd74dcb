//! MCP server transports
//!
//! One entry point, [`start_mcp_server`], runs an [`McpServer`] over either
//! stdio or streamable HTTP and returns a handle describing where it is
//! reachable. The HTTP mode also serves a `/health` endpoint.

use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::server::{McpServer, SERVER_NAME};
use crate::error::{Result, TodolistError};

/// Health check endpoint handler
async fn health_check() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(serde_json::json!({
        "status": "healthy",
        "service": SERVER_NAME
    }))
}

/// MCP server transport mode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum McpServerMode {
    /// Standard input/output transport
    Stdio,
    /// HTTP transport with optional port specification
    /// None = random port assignment
    Http {
        /// Port to bind on 127.0.0.1
        port: Option<u16>,
    },
}

/// Connection information returned after server startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerInfo {
    /// The transport mode used
    pub mode: McpServerMode,
    /// Connection URL or identifier
    pub connection_url: String,
    /// Actual bound port (for HTTP mode)
    pub port: Option<u16>,
}

/// Handle for managing a running MCP server
///
/// Dropping the handle stops the server.
#[derive(Debug)]
pub struct McpServerHandle {
    /// Server information
    pub info: McpServerInfo,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<()>>>,
}

impl McpServerHandle {
    fn new(
        info: McpServerInfo,
        shutdown_tx: oneshot::Sender<()>,
        task: JoinHandle<Result<()>>,
    ) -> Self {
        Self {
            info,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Get the connection information
    pub fn info(&self) -> &McpServerInfo {
        &self.info
    }

    /// Get the actual port (for HTTP mode)
    pub fn port(&self) -> Option<u16> {
        self.info.port
    }

    /// Get the connection URL
    pub fn url(&self) -> &str {
        &self.info.connection_url
    }

    /// Ask the server to stop. Safe to call more than once.
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            if tx.send(()).is_err() {
                tracing::warn!("Server shutdown signal receiver already dropped");
            }
        }
        Ok(())
    }

    /// Wait until the server task finishes.
    ///
    /// For stdio this is when the client disconnects; for HTTP it is after
    /// [`Self::shutdown`]. Returns immediately if already waited on. Safe to
    /// cancel and call again.
    pub async fn wait(&mut self) -> Result<()> {
        let Some(task) = self.task.as_mut() else {
            return Ok(());
        };
        let joined = task.await;
        self.task = None;
        joined.map_err(|e| TodolistError::transport(format!("Server task failed: {e}")))?
    }
}

/// Start an MCP server with the specified transport mode
///
/// Returns once the transport is set up; the server keeps running in a
/// background task owned by the returned handle.
pub async fn start_mcp_server(mode: McpServerMode, server: McpServer) -> Result<McpServerHandle> {
    match mode {
        McpServerMode::Stdio => start_stdio_server(server).await,
        McpServerMode::Http { port } => start_http_server(port, server).await,
    }
}

async fn start_stdio_server(server: McpServer) -> Result<McpServerHandle> {
    tracing::info!("Starting MCP server in stdio mode");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let running = serve_server(server, stdio())
            .await
            .map_err(|e| TodolistError::transport(format!("Failed to start stdio server: {e}")))?;
        tracing::info!("MCP stdio server started successfully");

        tokio::select! {
            quit = running.waiting() => {
                let reason = quit.map_err(|e| {
                    TodolistError::transport(format!("MCP stdio server task error: {e}"))
                })?;
                tracing::info!("MCP stdio server completed: {:?}", reason);
            }
            _ = shutdown_rx => {
                tracing::info!("MCP stdio server shutting down");
            }
        }
        Ok(())
    });

    let info = McpServerInfo {
        mode: McpServerMode::Stdio,
        connection_url: "stdio".to_string(),
        port: None,
    };

    Ok(McpServerHandle::new(info, shutdown_tx, task))
}

async fn start_http_server(port: Option<u16>, server: McpServer) -> Result<McpServerHandle> {
    let bind_addr = format!("127.0.0.1:{}", port.unwrap_or(0));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| TodolistError::transport(format!("Failed to bind to {bind_addr}: {e}")))?;
    let actual_port = listener.local_addr()?.port();
    tracing::debug!("Bound HTTP listener on port {}", actual_port);

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", axum::routing::get(health_check));

    let connection_url = format!("http://127.0.0.1:{actual_port}/mcp");
    tracing::info!("HTTP MCP server ready on {}", connection_url);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .map_err(|e| TodolistError::transport(format!("HTTP server error: {e}")))?;
        tracing::info!("HTTP MCP server stopped");
        Ok(())
    });

    let info = McpServerInfo {
        mode: McpServerMode::Http {
            port: Some(actual_port),
        },
        connection_url,
        port: Some(actual_port),
    };

    Ok(McpServerHandle::new(info, shutdown_tx, task))
}
