//! Logging middleware
//!
//! Logs every inbound update before it reaches the handlers.

use teloxide::types::{Message, Update, UpdateKind};
use tracing::{debug, info};
use crate::config::LoggingConfig;

/// Logging middleware for bot interactions
#[derive(Debug, Clone, Copy)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
}

/// Coarse classification of an inbound update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCategory {
    Command,
    WebAppData,
    Text,
    InlineQuery,
    Other,
}

impl UpdateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateCategory::Command => "command",
            UpdateCategory::WebAppData => "web_app_data",
            UpdateCategory::Text => "text",
            UpdateCategory::InlineQuery => "inline_query",
            UpdateCategory::Other => "other",
        }
    }
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_user_interactions: bool) -> Self {
        Self { log_user_interactions }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.log_updates)
    }

    pub fn is_enabled(&self) -> bool {
        self.log_user_interactions
    }

    /// Log incoming update
    pub fn log_update(&self, update: &Update) {
        if !self.log_user_interactions {
            return;
        }

        let user_id = update.from().map(|u| u.id.0);
        let category = categorize(update);

        match &update.kind {
            UpdateKind::Message(message) => {
                info!(
                    user_id = ?user_id,
                    chat_id = message.chat.id.0,
                    message_id = message.id.0,
                    category = category.as_str(),
                    text_chars = message.text().map(|t| t.chars().count()),
                    "Message received"
                );
            }
            UpdateKind::InlineQuery(query) => {
                info!(
                    user_id = ?user_id,
                    query = %query.query,
                    "Inline query received"
                );
            }
            _ => {
                debug!(update_id = update.id.0, user_id = ?user_id, "Other update type received");
            }
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Classify an update the same way the dispatcher routes it
pub fn categorize(update: &Update) -> UpdateCategory {
    match &update.kind {
        UpdateKind::Message(message) => categorize_message(message),
        UpdateKind::InlineQuery(_) => UpdateCategory::InlineQuery,
        _ => UpdateCategory::Other,
    }
}

fn categorize_message(message: &Message) -> UpdateCategory {
    if message.web_app_data().is_some() {
        return UpdateCategory::WebAppData;
    }

    match message.text() {
        Some(text) if text.starts_with('/') => UpdateCategory::Command,
        Some(_) => UpdateCategory::Text,
        None => UpdateCategory::Other,
    }
}
