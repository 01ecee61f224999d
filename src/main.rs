mod agent;
mod cli;
mod config;
mod error;
mod journal;
mod mcp;
mod openai;
mod tools;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use agent::JournalAgent;
use cli::{Cli, Command};
use config::Config;
use journal::Journal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr, so MCP stdout stays clean)
    pretty_env_logger::init();

    // Load the credential env file before reading configuration
    config::load_env_file();

    let config = Config::load("config.toml")?;
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Bare invocation prints usage and returns normally
        Cli::command().print_help()?;
        return Ok(());
    };

    let journal = Journal::from_current_dir(&config.journal.dir)?;

    match command {
        Command::Log { text } => {
            let note = text.join(" ");
            println!("{}", journal.append_note(&note)?);
        }
        Command::Summarize { day } => {
            let day = parse_day_arg(day.as_deref())?;
            let agent = JournalAgent::new(&config, journal)?;
            println!("{}", agent.summarize_day(day).await?);
        }
        Command::Tag { day } => {
            let day = parse_day_arg(day.as_deref())?;
            let agent = JournalAgent::new(&config, journal)?;
            println!("{}", agent.categorize_day(day).await?);
        }
        Command::Mcp => {
            log::info!("Starting codescribe MCP server on stdio");
            mcp::serve(config).await?;
        }
    }

    Ok(())
}

fn parse_day_arg(day: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    Ok(day.map(Journal::parse_day).transpose()?)
}
