//! Assistant-run backend
//!
//! Models a completion as an asynchronous job on the assistants API: a thread
//! is created, the user's text is added to it, a run is started with the
//! system prompt as its instructions, and the run is polled at a fixed
//! interval until it reaches a terminal status or the poll timeout elapses.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use crate::config::CompletionConfig;
use crate::utils::errors::{AIFactoryError, CompletionError, CompletionResult, Result};
use super::completion::{build_http_client, error_for_status, CompletionBackend};

/// Run statuses that mean "keep polling"
const PENDING_STATUSES: &[&str] = &["queued", "in_progress", "requires_action"];

#[derive(Debug, Clone, Deserialize)]
struct Thread {
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Run {
    id: String,
    status: String,
    #[serde(default)]
    last_error: Option<RunError>,
}

#[derive(Debug, Clone, Deserialize)]
struct RunError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageList {
    data: Vec<ThreadMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ThreadMessage {
    role: String,
    #[serde(default)]
    content: Vec<MessageContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<MessageText>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageText {
    value: String,
}

impl Run {
    fn is_pending(&self) -> bool {
        PENDING_STATUSES.contains(&self.status.as_str())
    }
}

/// Job-based completion backend with bounded polling
#[derive(Debug, Clone)]
pub struct AssistantRunBackend {
    client: Client,
    config: CompletionConfig,
    assistant_id: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl AssistantRunBackend {
    /// Create a new AssistantRunBackend instance
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let assistant_id = config
            .assistant_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AIFactoryError::Config("Assistant ID is required".to_string()))?;
        let client = build_http_client(&config)?;

        Ok(Self {
            client,
            assistant_id,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            poll_timeout: Duration::from_secs(config.poll_timeout_seconds),
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.config.api_key)
            .header("OpenAI-Beta", "assistants=v2")
    }

    async fn create_thread(&self) -> CompletionResult<Thread> {
        let response = self
            .authorized(self.client.post(self.url("threads")))
            .json(&json!({}))
            .send()
            .await?;

        Ok(error_for_status(response).await?.json().await?)
    }

    async fn add_user_message(&self, thread_id: &str, text: &str) -> CompletionResult<()> {
        let response = self
            .authorized(self.client.post(self.url(&format!("threads/{}/messages", thread_id))))
            .json(&json!({ "role": "user", "content": text }))
            .send()
            .await?;

        error_for_status(response).await?;
        Ok(())
    }

    async fn start_run(&self, thread_id: &str, instructions: &str) -> CompletionResult<Run> {
        let response = self
            .authorized(self.client.post(self.url(&format!("threads/{}/runs", thread_id))))
            .json(&json!({
                "assistant_id": self.assistant_id,
                "instructions": instructions,
            }))
            .send()
            .await?;

        Ok(error_for_status(response).await?.json().await?)
    }

    async fn fetch_run(&self, thread_id: &str, run_id: &str) -> CompletionResult<Run> {
        let response = self
            .authorized(self.client.get(self.url(&format!("threads/{}/runs/{}", thread_id, run_id))))
            .send()
            .await?;

        Ok(error_for_status(response).await?.json().await?)
    }

    /// Poll until the run leaves the pending statuses
    async fn wait_for_run(&self, thread_id: &str, mut run: Run) -> CompletionResult<Run> {
        let mut polls = 0u32;

        while run.is_pending() {
            tokio::time::sleep(self.poll_interval).await;
            run = self.fetch_run(thread_id, &run.id).await?;
            polls += 1;
            debug!(run_id = %run.id, status = %run.status, polls = polls, "Polled assistant run");
        }

        Ok(run)
    }

    async fn latest_answer(&self, thread_id: &str) -> CompletionResult<String> {
        let response = self
            .authorized(self.client.get(self.url(&format!("threads/{}/messages", thread_id))))
            .query(&[("order", "desc"), ("limit", "10")])
            .send()
            .await?;

        let list: MessageList = error_for_status(response).await?.json().await?;
        let message = list
            .data
            .into_iter()
            .find(|m| m.role == "assistant")
            .ok_or_else(|| CompletionError::InvalidResponse("thread has no assistant message".to_string()))?;

        let text = message
            .content
            .into_iter()
            .filter(|c| c.kind == "text")
            .filter_map(|c| c.text.map(|t| t.value))
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl CompletionBackend for AssistantRunBackend {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> CompletionResult<String> {
        let thread = self.create_thread().await?;
        self.add_user_message(&thread.id, user_text).await?;
        let run = self.start_run(&thread.id, system_prompt).await?;

        debug!(thread_id = %thread.id, run_id = %run.id, status = %run.status, "Assistant run started");

        let run = tokio::time::timeout(self.poll_timeout, self.wait_for_run(&thread.id, run))
            .await
            .map_err(|_| CompletionError::PollTimeout {
                seconds: self.poll_timeout.as_secs(),
            })??;

        if run.status != "completed" {
            if let Some(error) = &run.last_error {
                warn!(
                    run_id = %run.id,
                    status = %run.status,
                    code = ?error.code,
                    message = ?error.message,
                    "Assistant run failed"
                );
            }
            return Err(CompletionError::RunFailed { status: run.status });
        }

        self.latest_answer(&thread.id).await
    }

    fn name(&self) -> &'static str {
        "assistant"
    }
}
