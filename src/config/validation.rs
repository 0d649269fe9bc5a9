//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AIFactoryError, Result};
use super::{BotMode, CompletionStrategy, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_completion_config(&settings.completion)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(AIFactoryError::Config(
            "Bot token is required (TELEGRAM_BOT_TOKEN)".to_string()
        ));
    }

    url::Url::parse(&config.tools_url).map_err(|e| {
        AIFactoryError::Config(format!("Invalid tools URL '{}': {}", config.tools_url, e))
    })?;

    if config.mode == BotMode::Webhook {
        let webhook_url = config.webhook_url.as_deref().unwrap_or_default();
        if webhook_url.is_empty() {
            return Err(AIFactoryError::Config(
                "Webhook mode requires a webhook URL (WEBHOOK_URL)".to_string()
            ));
        }

        url::Url::parse(webhook_url).map_err(|e| {
            AIFactoryError::Config(format!("Invalid webhook URL '{}': {}", webhook_url, e))
        })?;
    }

    Ok(())
}

/// Validate completion backend configuration
fn validate_completion_config(config: &super::CompletionConfig) -> Result<()> {
    if config.api_key.is_empty() {
        return Err(AIFactoryError::Config(
            "Completion API key is required (OPENAI_API_KEY)".to_string()
        ));
    }

    url::Url::parse(&config.base_url).map_err(|e| {
        AIFactoryError::Config(format!("Invalid completion base URL '{}': {}", config.base_url, e))
    })?;

    if config.timeout_seconds == 0 {
        return Err(AIFactoryError::Config(
            "Completion timeout must be greater than 0".to_string()
        ));
    }

    if config.strategy == CompletionStrategy::Chat {
        if config.model.is_empty() {
            return Err(AIFactoryError::Config(
                "Completion model is required".to_string()
            ));
        }

        if config.max_tokens == 0 {
            return Err(AIFactoryError::Config(
                "Max tokens must be greater than 0".to_string()
            ));
        }
    }

    if config.strategy == CompletionStrategy::Assistant {
        if config.assistant_id.as_deref().unwrap_or_default().is_empty() {
            return Err(AIFactoryError::Config(
                "Assistant strategy requires an assistant ID (OPENAI_ASSISTANT_ID)".to_string()
            ));
        }

        if config.poll_interval_ms == 0 {
            return Err(AIFactoryError::Config(
                "Poll interval must be greater than 0".to_string()
            ));
        }

        if config.poll_timeout_seconds == 0 {
            return Err(AIFactoryError::Config(
                "Poll timeout must be greater than 0".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate session store configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.ttl_minutes.is_some() && config.sweep_interval_seconds == 0 {
        return Err(AIFactoryError::Config(
            "Session sweep interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AIFactoryError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AIFactoryError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
