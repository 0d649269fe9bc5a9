//! Test context for unified test setup
//!
//! This module provides a unified test context that initializes the mock
//! Telegram server, settings, the session store and in-process backends.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use AIFactory::config::Settings;
use AIFactory::services::{CompletionBackend, ServiceFactory};
use AIFactory::state::SessionStore;
use AIFactory::utils::errors::{CompletionError, CompletionResult};

use super::telegram_mock::{test_bot_token, TelegramMockServer};

/// Unified test context that manages all test components
pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub settings: Settings,
    pub store: SessionStore,
    pub bot_token: String,
}

impl TestContext {
    /// Create a new test context with all components initialized
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let telegram_mock = TelegramMockServer::new().await;
        if config.setup_default_mocks {
            telegram_mock.setup_default_mocks().await;
        }

        let bot_token = test_bot_token();
        let settings = Self::create_test_settings(&bot_token)?;
        let store = SessionStore::from_config(&settings.session);

        Ok(Self {
            telegram_mock,
            settings,
            store,
            bot_token,
        })
    }

    /// Create test settings
    pub fn create_test_settings(bot_token: &str) -> Result<Settings, Box<dyn std::error::Error + Send + Sync>> {
        let settings = Settings::from_toml_str(&format!(
            r#"
            [bot]
            token = "{}"
            tools_url = "https://tools.example.com/menu/"

            [completion]
            api_key = "test-api-key"
            base_url = "http://127.0.0.1:9/v1"

            [server]
            environment = "test"
            "#,
            bot_token
        ))?;

        Ok(settings)
    }

    /// Bot talking to the mock Telegram server
    pub fn create_bot(&self) -> Result<teloxide::Bot, Box<dyn std::error::Error + Send + Sync>> {
        let bot = teloxide::Bot::new(&self.bot_token)
            .set_api_url(self.telegram_mock.api_url().parse()?);

        Ok(bot)
    }

    /// Services around the given backend
    pub fn services_with(
        &self,
        backend: Arc<dyn CompletionBackend>,
    ) -> Result<ServiceFactory, Box<dyn std::error::Error + Send + Sync>> {
        Ok(ServiceFactory::with_backend(&self.settings, backend)?)
    }

    /// Verify that Telegram API endpoints were called
    pub async fn verify_telegram_calls(&self, endpoint: &str, expected_calls: usize) {
        self.telegram_mock.verify_endpoint_called(endpoint, expected_calls).await;
    }
}

/// Configuration for test context setup
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub setup_default_mocks: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            setup_default_mocks: true,
        }
    }
}

/// Backend that answers with a fixed text and records every call
#[derive(Debug, Default)]
pub struct RecordingBackend {
    answer: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingBackend {
    pub fn new(answer: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.into(),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// `(system_prompt, user_text)` pairs in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for RecordingBackend {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> CompletionResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_text.to_string()));
        Ok(self.answer.clone())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Backend that always fails
#[derive(Debug, Default)]
pub struct FailingBackend;

#[async_trait]
impl CompletionBackend for FailingBackend {
    async fn complete(&self, _system_prompt: &str, _user_text: &str) -> CompletionResult<String> {
        Err(CompletionError::Status {
            status: 500,
            body: "upstream failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
