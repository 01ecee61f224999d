use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shared HTTP client for an OpenAI-compatible chat completions API.
#[derive(Debug)]
pub struct OpenAiClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Parameters for a chat request to the completion provider.
pub struct ChatRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
}

impl OpenAiClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            endpoint,
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Send a chat request and return the first completion choice, trimmed.
    ///
    /// Fails on transport errors, non-success status codes, and responses
    /// without usable text. The failure is surfaced once; no retries.
    pub async fn chat(&self, request: ChatRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user_prompt,
                },
            ],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Provider { status, body });
        }

        let response: ChatCompletionResponse = response.json().await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(Error::EmptyCompletion)?;

        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyCompletion);
        }

        Ok(content.to_string())
    }
}

/// Request body for the Chat Completions API.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

/// A role-tagged message in the chat.
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response body from the Chat Completions API.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
