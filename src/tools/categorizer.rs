use super::Tool;
use crate::error::Result;
use crate::openai::{ChatRequest, OpenAiClient};

/// Tags each journal entry with a theme using the LLM.
#[derive(Debug)]
pub struct Categorizer {
    client: OpenAiClient,
    temperature: f32,
}

impl Categorizer {
    pub fn new(client: OpenAiClient, temperature: f32) -> Self {
        Self {
            client,
            temperature,
        }
    }

    fn system_prompt() -> &'static str {
        "Tag or categorize each journal entry by theme such as bug, idea, decision, or question."
    }
}

#[async_trait::async_trait]
impl Tool for Categorizer {
    type Input = String;
    type Output = String;

    fn name(&self) -> &str {
        "categorizer"
    }

    async fn run(&self, entries: String) -> Result<String> {
        log::info!("Categorizer: tagging {} chars of journal text", entries.len());

        let result = self
            .client
            .chat(ChatRequest {
                system_prompt: Self::system_prompt().to_string(),
                user_prompt: entries,
                temperature: self.temperature,
            })
            .await?;

        log::info!("Categorizer: received {} chars", result.len());
        Ok(result)
    }
}
