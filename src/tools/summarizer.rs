use super::Tool;
use crate::error::Result;
use crate::openai::{ChatRequest, OpenAiClient};

/// Condenses a day's journal entries into a summary using the LLM.
#[derive(Debug)]
pub struct Summarizer {
    client: OpenAiClient,
    temperature: f32,
}

impl Summarizer {
    pub fn new(client: OpenAiClient, temperature: f32) -> Self {
        Self {
            client,
            temperature,
        }
    }

    fn system_prompt() -> &'static str {
        "Summarize the following journal entries."
    }
}

#[async_trait::async_trait]
impl Tool for Summarizer {
    type Input = String;
    type Output = String;

    fn name(&self) -> &str {
        "summarizer"
    }

    async fn run(&self, entries: String) -> Result<String> {
        log::info!("Summarizer: condensing {} chars of journal text", entries.len());

        let result = self
            .client
            .chat(ChatRequest {
                system_prompt: Self::system_prompt().to_string(),
                user_prompt: entries,
                temperature: self.temperature,
            })
            .await?;

        log::info!("Summarizer: received {} chars", result.len());
        Ok(result)
    }
}
