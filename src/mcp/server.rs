use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ProtocolVersion, ServerCapabilities, ServerInfo, ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::transport::io::stdio;
use rmcp::{serve_server, Error as McpError, RoleServer, ServerHandler};
use tokio_util::sync::CancellationToken;

use super::tools::{register_journal_tools, ToolContext, ToolRegistry};
use crate::config::Config;

/// MCP server exposing the journal tools over stdio.
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    context: ToolContext,
}

impl McpServer {
    /// Build a server rooted at the process working directory.
    pub fn new(config: Config) -> crate::error::Result<Self> {
        let mut registry = ToolRegistry::new();
        register_journal_tools(&mut registry);

        Ok(Self {
            registry: Arc::new(registry),
            context: ToolContext::from_current_dir(config)?,
        })
    }

    #[cfg(test)]
    fn with_context(context: ToolContext) -> Self {
        let mut registry = ToolRegistry::new();
        register_journal_tools(&mut registry);
        Self {
            registry: Arc::new(registry),
            context,
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.registry.get(&request.name) {
            Some(tool) => {
                tool.execute(request.arguments.unwrap_or_default(), &self.context)
                    .await
            }
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: "codescribe".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            instructions: Some(
                "A personal developer journal for this project. Use logNote to record \
                 free-form notes, reminders, and decisions; summarizeJournal to summarize a \
                 day's entries; categorizeJournal to tag entries by theme."
                    .into(),
            ),
        }
    }
}

/// Serve the journal tools over stdio.
///
/// Runs until the host closes the transport or the process receives ctrl-c;
/// the server never exits on its own.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = McpServer::new(config)?;

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");
        log::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    let _running_service = serve_server(server, stdio()).await?;
    log::info!("MCP server started on stdio");

    ct.cancelled().await;
    log::info!("MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> (tempfile::TempDir, McpServer) {
        let dir = tempfile::tempdir().unwrap();
        let context = ToolContext::new(Config::default(), dir.path());
        (dir, McpServer::with_context(context))
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let (_dir, server) = test_server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "codescribe");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("logNote"));
    }

    #[test]
    fn test_registry_holds_the_journal_tools() {
        let (_dir, server) = test_server();
        let tools = server.registry.list_tools();
        assert_eq!(tools.len(), 3);
        assert!(tools.iter().any(|t| t.name == "logNote"));
    }
}
