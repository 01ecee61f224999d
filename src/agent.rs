use chrono::NaiveDate;

use crate::config::Config;
use crate::error::Result;
use crate::journal::Journal;
use crate::openai::OpenAiClient;
use crate::tools::{Categorizer, Summarizer, Tool};

/// Agent that orchestrates journal storage and the LLM tools.
///
/// Owns one client per tool; both read the same provider configuration.
#[derive(Debug)]
pub struct JournalAgent {
    journal: Journal,
    summarizer: Summarizer,
    categorizer: Categorizer,
}

impl JournalAgent {
    /// Build an agent from configuration.
    ///
    /// Fails when the provider credential is missing. Note appending does not
    /// go through the agent and never needs the credential.
    pub fn new(config: &Config, journal: Journal) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let summarizer_client = OpenAiClient::new(
            config.provider.endpoint.clone(),
            config.provider.model.clone(),
            api_key.clone(),
        );
        let categorizer_client = OpenAiClient::new(
            config.provider.endpoint.clone(),
            config.provider.model.clone(),
            api_key,
        );

        Ok(Self {
            journal,
            summarizer: Summarizer::new(summarizer_client, config.provider.temperature),
            categorizer: Categorizer::new(categorizer_client, config.provider.temperature),
        })
    }

    /// Summarize one day's entries. Defaults to today.
    ///
    /// The journal file is read before any provider call, so a missing day
    /// fails without touching the network.
    pub async fn summarize_day(&self, day: Option<NaiveDate>) -> Result<String> {
        let date = day.unwrap_or_else(Journal::today);
        let entries = self.journal.read_day(date)?;
        self.summarizer.run(entries).await
    }

    /// Tag one day's entries by theme. Defaults to today.
    pub async fn categorize_day(&self, day: Option<NaiveDate>) -> Result<String> {
        let date = day.unwrap_or_else(Journal::today);
        let entries = self.journal.read_day(date)?;
        self.categorizer.run(entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn configured() -> Config {
        Config {
            api_key: Some("sk-test".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_requires_credential() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path(), ".journal");

        let err = JournalAgent::new(&Config::default(), journal).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[tokio::test]
    async fn test_summarize_missing_day_fails_before_provider_call() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path(), ".journal");
        let agent = JournalAgent::new(&configured(), journal).unwrap();

        let day = NaiveDate::parse_from_str("2099-12-31", "%Y-%m-%d").unwrap();
        let err = agent.summarize_day(Some(day)).await.unwrap_err();
        assert!(matches!(err, Error::JournalNotFound(_)));
        assert!(err.to_string().contains(".journal/2099-12-31.txt"));
    }

    #[tokio::test]
    async fn test_categorize_missing_day_fails_before_provider_call() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path(), ".journal");
        let agent = JournalAgent::new(&configured(), journal).unwrap();

        let day = NaiveDate::parse_from_str("2099-12-31", "%Y-%m-%d").unwrap();
        let err = agent.categorize_day(Some(day)).await.unwrap_err();
        assert!(matches!(err, Error::JournalNotFound(_)));
    }
}
