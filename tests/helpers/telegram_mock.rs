//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self { success: true }
    }
}

impl MockResponseConfig {
    pub fn failing() -> Self {
        Self { success: false }
    }
}

/// Method names are matched case-insensitively; teloxide sends them capitalized
fn method_path(name: &str) -> String {
    format!(r"(?i)^/bot[^/]+/{}$", name)
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to hand to `Bot::set_api_url`
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    async fn mount(&self, name: &str, config: MockResponseConfig, ok_result: Value, error_description: &str) {
        let response_body = if config.success {
            json!({ "ok": true, "result": ok_result })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": error_description
            })
        };

        let response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        Mock::given(method("POST"))
            .and(path_regex(method_path(name)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let sent = json!({
            "message_id": 123,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "AIFactoryBot",
                "username": "aifactory_bot"
            },
            "chat": {
                "id": test_chat_id(),
                "type": "private",
                "first_name": "TestUser"
            },
            "date": 1640995200,
            "text": "Test message"
        });

        self.mount("sendMessage", config, sent, "Bad Request: chat not found").await;
    }

    /// Setup mock for answerInlineQuery endpoint
    pub async fn mock_answer_inline_query(&self, config: MockResponseConfig) {
        self.mount("answerInlineQuery", config, json!(true), "Bad Request: query is too old").await;
    }

    /// Setup mock for getWebhookInfo endpoint
    pub async fn mock_get_webhook_info(&self, config: MockResponseConfig) {
        let info = json!({
            "url": "https://bot.example.com/webhook",
            "has_custom_certificate": false,
            "pending_update_count": 2
        });

        self.mount("getWebhookInfo", config, info, "Unauthorized").await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_answer_inline_query(config.clone()).await;
        self.mock_get_webhook_info(config).await;
    }

    /// Setup mocks for error scenarios
    pub async fn setup_error_mocks(&self) {
        let config = MockResponseConfig::failing();

        self.mock_send_message(config.clone()).await;
        self.mock_answer_inline_query(config.clone()).await;
        self.mock_get_webhook_info(config).await;
    }

    /// JSON bodies of every request made to `endpoint`, in arrival order
    pub async fn request_bodies(&self, endpoint: &str) -> Vec<Value> {
        let endpoint = endpoint.to_lowercase();
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&format!("/{}", endpoint)))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }

    /// Texts of every sendMessage call, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.request_bodies("sendMessage")
            .await
            .into_iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let matching_requests = self.request_bodies(endpoint).await.len();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test chat ID
pub fn test_chat_id() -> i64 {
    987654321
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}
