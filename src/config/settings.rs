//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Default web-app menu opened by the "tools" buttons
pub const DEFAULT_TOOLS_URL: &str = "https://ai4business-ai.github.io/frontend-repo/";

/// Default OpenAI-compatible API root
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";

/// Plain environment variable names accepted alongside the prefixed ones
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("TELEGRAM_BOT_TOKEN", "bot.token"),
    ("BOT_MODE", "bot.mode"),
    ("WEBHOOK_URL", "bot.webhook_url"),
    ("TOOLS_URL", "bot.tools_url"),
    ("OPENAI_API_KEY", "completion.api_key"),
    ("OPENAI_ASSISTANT_ID", "completion.assistant_id"),
    ("PORT", "server.port"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub completion: CompletionConfig,
    pub session: SessionConfig,
    pub prompts: PromptsConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// How updates reach the bot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
    pub mode: BotMode,
    /// Externally reachable base URL; `/webhook` is appended in webhook mode
    pub webhook_url: Option<String>,
    pub tools_url: String,
}

/// Which completion backend answers user requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStrategy {
    /// One chat-completions request per turn
    #[default]
    Chat,
    /// Thread + run on the assistants API, polled until terminal
    Assistant,
}

/// Completion API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub strategy: CompletionStrategy,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
    pub assistant_id: Option<String>,
    pub poll_interval_ms: u64,
    pub poll_timeout_seconds: u64,
}

/// Pending-intent store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pending intents older than this are treated as absent; `None` keeps them forever
    pub ttl_minutes: Option<u64>,
    pub sweep_interval_seconds: u64,
}

/// Optional overrides for the compiled-in system prompts
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub market_analysis: Option<String>,
    pub business_idea: Option<String>,
    pub business_model: Option<String>,
    pub case_studies: Option<String>,
    pub default: Option<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Deployment label reported by `/health`
    pub environment: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file; stdout only when unset
    pub directory: Option<String>,
    pub json: bool,
    /// Log every inbound update before routing
    pub log_updates: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("AIFACTORY")
                    .prefix_separator("_")
                    .separator("__"),
            );

        for (var, key) in LEGACY_ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Load settings from a TOML document, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AIFactoryError> {
        super::validation::validate_settings(self)
    }

    /// Full URL Telegram should deliver updates to
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.bot
            .webhook_url
            .as_deref()
            .map(|base| format!("{}/webhook", base.trim_end_matches('/')))
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            mode: BotMode::Polling,
            webhook_url: None,
            tools_url: DEFAULT_TOOLS_URL.to_string(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            strategy: CompletionStrategy::Chat,
            api_key: String::new(),
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 3000,
            timeout_seconds: 120,
            assistant_id: None,
            poll_interval_ms: 1000,
            poll_timeout_seconds: 120,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: Some(60),
            sweep_interval_seconds: 300,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            environment: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            json: false,
            log_updates: true,
        }
    }
}
