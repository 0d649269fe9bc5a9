//! Chat-completions backend
//!
//! Sends one `POST /chat/completions` request per turn with the system prompt
//! and the user's text, and returns the first choice's content.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::CompletionConfig;
use crate::utils::errors::{CompletionError, CompletionResult, Result};
use super::completion::{build_http_client, error_for_status, CompletionBackend};

/// Chat message in a completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Chat completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

/// Chat completions response body (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Single-shot chat completion backend
#[derive(Debug, Clone)]
pub struct ChatCompletionBackend {
    client: Client,
    config: CompletionConfig,
}

impl ChatCompletionBackend {
    /// Create a new ChatCompletionBackend instance
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionBackend {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> CompletionResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_text },
            ],
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, input_chars = user_text.chars().count(), "Requesting chat completion");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let response = error_for_status(response).await?;
        let body: ChatResponse = response.json().await?;

        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::InvalidResponse("response has no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        if content.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        debug!(output_chars = content.chars().count(), "Chat completion received");
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}
