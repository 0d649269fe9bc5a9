//! Start command handler
//!
//! Greets the user and offers the button that opens the tools web app

use teloxide::{Bot, types::{Message, ChatId}, prelude::*};
use tracing::debug;
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::handlers::texts;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = msg.from.as_ref().map(|u| u.id.0 as i64);
    debug!(user_id = ?user_id, chat_id = ?msg.chat.id, "Processing /start command");

    send_welcome(&bot, msg.chat.id, &services).await
}

/// Send the welcome text with the tools button
pub async fn send_welcome(bot: &Bot, chat_id: ChatId, services: &ServiceFactory) -> Result<()> {
    bot.send_message(chat_id, texts::WELCOME)
        .reply_markup(texts::tools_keyboard(texts::OPEN_TOOLS, &services.tools_url))
        .await?;

    Ok(())
}
