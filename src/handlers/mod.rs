//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for /start and /help
//! - Web-app data handler for tool selection
//! - Message handler for the free-text tool input
//! - Inline query handler

pub mod commands;
pub mod inline;
pub mod messages;
pub mod texts;
pub mod web_app;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use inline::handle_inline_query;
pub use messages::{handle_message, process_text, TurnOutcome};
pub use web_app::{handle_web_app_data, process_menu_selection};

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, Update};
use crate::middleware::LoggingMiddleware;
use crate::utils::errors::AIFactoryError;

/// Create the main update handler
///
/// Requires `Bot`, `Me`, `ServiceFactory` and `SessionStore` in the dependency
/// map. Commands are matched before web-app data, which is matched before
/// plain text.
pub fn schema(update_logger: LoggingMiddleware) -> UpdateHandler<AIFactoryError> {
    dptree::entry()
        .inspect(move |update: Update| update_logger.log_update(&update))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.web_app_data().is_some())
                        .endpoint(handle_web_app_data),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.text().is_some())
                        .endpoint(handle_message),
                ),
        )
        .branch(Update::filter_inline_query().endpoint(handle_inline_query))
}
