//! MCP server mode.
//!
//! Exposes the journal operations as remotely invokable tools for agent
//! hosts: `logNote`, `summarizeJournal`, `categorizeJournal`. Each returns a
//! text content envelope equal to the CLI's printed output.
//!
//! ## Host configuration (Claude Desktop)
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "codescribe": {
//!       "command": "codescribe",
//!       "args": ["mcp"]
//!     }
//!   }
//! }
//! ```

mod server;
mod tools;

pub use server::{serve, McpServer};
pub use tools::{McpTool, ToolContext, ToolRegistry};
