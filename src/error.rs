use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by journal operations.
///
/// Every operation returns one of these to its immediate caller; nothing is
/// retried or swallowed. The CLI prints the message to stderr, the MCP server
/// wraps it in an error tool result.
#[derive(Debug, Error)]
pub enum Error {
    /// The note was empty after trimming. Nothing is written.
    #[error("no note content provided")]
    EmptyNote,

    /// A day argument that does not parse as a calendar date.
    #[error("invalid day '{0}': expected YYYY-MM-DD")]
    InvalidDay(String),

    /// Summarize/categorize requested for a day with no journal file.
    #[error("journal file {} does not exist", .0.display())]
    JournalNotFound(PathBuf),

    /// The completion provider credential is not configured.
    #[error(
        "OPENAI_API_KEY missing. Add it to the .env file next to the codescribe \
         binary, or point CODESCRIBE_ENV_PATH at an env file that defines it"
    )]
    MissingApiKey,

    /// The completion request never produced a response.
    #[error("failed to reach completion provider: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion provider answered with a non-success status.
    #[error("completion provider error ({status}): {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The completion provider answered but carried no usable text.
    #[error("completion provider returned no content")]
    EmptyCompletion,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
