use clap::{Parser, Subcommand};

/// Command-line surface of the journal tool.
///
/// One-shot subcommands except `mcp`, which serves until its host terminates
/// it. Invoking with no arguments prints this usage text and returns.
#[derive(Parser)]
#[command(name = "codescribe", version)]
#[command(about = "Personal developer journal with LLM-assisted summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append a note to today's journal
    Log {
        /// Note text; remaining words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Summarize a day's journal entries with the configured model
    #[command(visible_alias = "summary")]
    Summarize {
        /// Day to summarize (YYYY-MM-DD, defaults to today)
        day: Option<String>,
    },

    /// Tag each of a day's entries by theme (bug, idea, decision, question)
    #[command(visible_aliases = ["categorize", "categorise"])]
    Tag {
        /// Day to categorize (YYYY-MM-DD, defaults to today)
        day: Option<String>,
    },

    /// Serve the journal tools over the Model Context Protocol (stdio)
    Mcp,
}
