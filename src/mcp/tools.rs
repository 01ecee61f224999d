//! The journal operations as remotely invokable MCP tools.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::JournalAgent;
use crate::config::Config;
use crate::journal::Journal;

/// Tool description teaching agent hosts when to record a journal note.
const LOG_NOTE_DESCRIPTION: &str = "Adds a free-form note, idea, reminder, or comment to the \
developer's personal journal for this project (saved as a dated text file in the '.journal' \
folder).\n\n\
Use this tool to record:\n\
- Work-in-progress thoughts\n\
- Personal reminders\n\
- Design decisions\n\
- Reflections, doubts, or open questions\n\
- Context about why something was done\n\
- TODOs or things to revisit\n\n\
Trigger this tool with any natural instruction such as:\n\
- 'Add a note that...'\n\
- 'Remember to...'\n\
- 'Jot down...'\n\
- 'Make a comment about...'\n\
- 'Add to the project journal that...'\n\n\
Do not use this tool for adding documentation or comments inside the source code. Use regular \
code comments or documentation blocks for that purpose.\n\n\
This journal is for personal context, process notes, or broader observations\u{2014}anything you \
want to keep track of during development that doesn't belong directly in the codebase.";

/// Context shared by all tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    root: PathBuf,
}

impl ToolContext {
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(config),
            root: root.into(),
        }
    }

    /// Context rooted at the process working directory.
    pub fn from_current_dir(config: Config) -> crate::error::Result<Self> {
        let root = std::env::current_dir()?;
        Ok(Self::new(config, root))
    }

    fn journal(&self) -> Journal {
        Journal::new(self.root.clone(), self.config.journal.dir.clone())
    }
}

/// Interface every MCP tool implements.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments.
    fn schema(&self) -> serde_json::Value;

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry mapping tool names to implementations.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// All registered tools as MCP `Tool` descriptors for `list_tools`.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }
}

/// Register the three journal tools.
pub fn register_journal_tools(registry: &mut ToolRegistry) {
    registry.register(LogNoteTool);
    registry.register(SummarizeJournalTool);
    registry.register(CategorizeJournalTool);
}

fn parse_arguments<T: serde::de::DeserializeOwned>(
    arguments: serde_json::Map<String, serde_json::Value>,
) -> std::result::Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
}

/// Wrap text in the content envelope every tool call returns.
///
/// Operation failures become error-flagged results, not protocol faults.
fn text_result(text: impl Into<String>, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: text.into() }),
            None,
        )],
        is_error: Some(is_error),
    }
}

#[derive(Debug, Deserialize)]
struct LogNoteRequest {
    note: String,
}

#[derive(Debug, Deserialize)]
struct DayRequest {
    #[serde(default)]
    day: Option<String>,
}

/// `logNote(note)` — append a note to today's journal file.
pub struct LogNoteTool;

#[async_trait::async_trait]
impl McpTool for LogNoteTool {
    fn name(&self) -> &'static str {
        "logNote"
    }

    fn description(&self) -> &'static str {
        LOG_NOTE_DESCRIPTION
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "note": {
                    "type": "string",
                    "description": "Note text to append to today's journal"
                }
            },
            "required": ["note"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: LogNoteRequest = parse_arguments(arguments)?;

        Ok(match context.journal().append_note(&request.note) {
            Ok(confirmation) => text_result(confirmation, false),
            Err(e) => text_result(e.to_string(), true),
        })
    }
}

/// `summarizeJournal(day?)` — summarize one day's entries.
pub struct SummarizeJournalTool;

#[async_trait::async_trait]
impl McpTool for SummarizeJournalTool {
    fn name(&self) -> &'static str {
        "summarizeJournal"
    }

    fn description(&self) -> &'static str {
        "Summarizes the journal entries for a day (YYYY-MM-DD, defaults to today) using the \
         configured language model."
    }

    fn schema(&self) -> serde_json::Value {
        day_schema("Day to summarize (YYYY-MM-DD, defaults to today)")
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DayRequest = parse_arguments(arguments)?;

        let outcome = async {
            let day = request.day.as_deref().map(Journal::parse_day).transpose()?;
            let agent = JournalAgent::new(&context.config, context.journal())?;
            agent.summarize_day(day).await
        }
        .await;

        Ok(match outcome {
            Ok(summary) => text_result(summary, false),
            Err(e) => text_result(e.to_string(), true),
        })
    }
}

/// `categorizeJournal(day?)` — tag one day's entries by theme.
pub struct CategorizeJournalTool;

#[async_trait::async_trait]
impl McpTool for CategorizeJournalTool {
    fn name(&self) -> &'static str {
        "categorizeJournal"
    }

    fn description(&self) -> &'static str {
        "Tags or categorizes each journal entry for a day (YYYY-MM-DD, defaults to today) by \
         theme such as bug, idea, decision, or question."
    }

    fn schema(&self) -> serde_json::Value {
        day_schema("Day to categorize (YYYY-MM-DD, defaults to today)")
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DayRequest = parse_arguments(arguments)?;

        let outcome = async {
            let day = request.day.as_deref().map(Journal::parse_day).transpose()?;
            let agent = JournalAgent::new(&context.config, context.journal())?;
            agent.categorize_day(day).await
        }
        .await;

        Ok(match outcome {
            Ok(categories) => text_result(categories, false),
            Err(e) => text_result(e.to_string(), true),
        })
    }
}

fn day_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "day": {
                "type": "string",
                "description": description
            }
        },
        "required": []
    })
}
