//! Completion backend abstraction
//!
//! A backend turns a system prompt and the user's text into a single answer.
//! Two strategies exist: a single chat-completions call and an assistant run
//! that is polled until it finishes. Which one is used is a configuration choice.

use std::sync::Arc;
use async_trait::async_trait;
use crate::config::{CompletionConfig, CompletionStrategy};
use crate::utils::errors::{CompletionResult, Result};
use super::assistant::AssistantRunBackend;
use super::openai::ChatCompletionBackend;

/// Generative-text service used to answer a tool request
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce the answer for `user_text` under `system_prompt`
    async fn complete(&self, system_prompt: &str, user_text: &str) -> CompletionResult<String>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Build the backend selected by configuration
pub fn create_backend(config: &CompletionConfig) -> Result<Arc<dyn CompletionBackend>> {
    let backend: Arc<dyn CompletionBackend> = match config.strategy {
        CompletionStrategy::Chat => Arc::new(ChatCompletionBackend::new(config.clone())?),
        CompletionStrategy::Assistant => Arc::new(AssistantRunBackend::new(config.clone())?),
    };

    Ok(backend)
}

/// Build the shared HTTP client for completion requests
pub(crate) fn build_http_client(config: &CompletionConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!("AIFactory-Bot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Turn a non-success response into a status error carrying the body
pub(crate) async fn error_for_status(response: reqwest::Response) -> CompletionResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(crate::utils::errors::CompletionError::Status {
        status: status.as_u16(),
        body: crate::utils::helpers::truncate_text(&body, 500),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_backend_follows_strategy() {
        let mut config = CompletionConfig {
            api_key: "sk-test".to_string(),
            ..CompletionConfig::default()
        };
        assert_eq!(create_backend(&config).unwrap().name(), "chat");

        config.strategy = CompletionStrategy::Assistant;
        config.assistant_id = Some("asst_1".to_string());
        assert_eq!(create_backend(&config).unwrap().name(), "assistant");
    }
}
