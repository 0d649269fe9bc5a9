//! Web-app data handler
//!
//! Handles the payload the tools menu sends back when the user picks a tool:
//! records the pending intent and asks the user for their input.

use teloxide::{Bot, types::{Message, ChatId}, prelude::*};
use tracing::info;
use crate::utils::errors::{AIFactoryError, Result};
use crate::utils::logging;
use crate::models::{classify_payload, MenuOutcome};
use crate::state::SessionStore;
use crate::handlers::texts;

/// Handle a `web_app_data` service message
pub async fn handle_web_app_data(bot: Bot, msg: Message, store: SessionStore) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        AIFactoryError::InvalidInput("No user in web app message".to_string())
    })?;
    let payload = msg.web_app_data().map(|d| d.data.as_str()).ok_or_else(|| {
        AIFactoryError::InvalidInput("Message carries no web app data".to_string())
    })?;

    process_menu_selection(&bot, msg.chat.id, user.id.0 as i64, payload, &store).await?;
    Ok(())
}

/// Apply a menu selection for a user and reply in the given chat
pub async fn process_menu_selection(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    payload: &str,
    store: &SessionStore,
) -> Result<MenuOutcome> {
    info!(user_id = user_id, payload = payload, "Web app data received");

    let outcome = classify_payload(payload);

    match &outcome {
        MenuOutcome::Selected(tool) => {
            store.set_pending(user_id, *tool);
            logging::log_user_action(user_id, "tool_selected", Some(tool.key()));

            bot.send_message(chat_id, tool.label()).await?;
            bot.send_message(chat_id, tool.instruction()).await?;
        }
        MenuOutcome::Unrecognized => {
            logging::log_unrecognized_selection(user_id, payload, None);
            bot.send_message(chat_id, texts::CHOOSE_FROM_MENU).await?;
        }
        MenuOutcome::Malformed(error) => {
            logging::log_unrecognized_selection(user_id, payload, Some(error));
            bot.send_message(chat_id, texts::GENERIC_ERROR).await?;
        }
    }

    Ok(outcome)
}
