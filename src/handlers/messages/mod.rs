//! Message handlers module
//!
//! Handles free-text messages: a message from a user with a pending tool is
//! sent to the completion backend and the answer is relayed back in chunks.
//! Text from users without a pending tool is ignored.

use std::time::Instant;
use teloxide::{Bot, types::{Message, ChatId}, prelude::*};
use tracing::{debug, error, warn};
use crate::utils::errors::{AIFactoryError, Result};
use crate::utils::helpers::{chunk_text, MESSAGE_CHUNK_LIMIT};
use crate::utils::logging;
use crate::models::ToolKind;
use crate::services::ServiceFactory;
use crate::state::SessionStore;
use crate::handlers::texts;

/// What a free-text message led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No tool was pending; nothing was sent
    Ignored,
    /// The answer went out in `chunks` messages followed by the restart prompt
    Answered { tool: ToolKind, chunks: usize },
    /// The backend or delivery failed and the user got the failure notice
    Failed { tool: ToolKind },
}

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    store: SessionStore,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        AIFactoryError::InvalidInput("No user in message".to_string())
    })?;

    let Some(text) = msg.text() else {
        return Ok(());
    };

    process_text(&bot, msg.chat.id, user.id.0 as i64, text, &services, &store).await?;
    Ok(())
}

/// Run one free-text turn for a user
///
/// Only the acknowledgment's transport error is returned; backend and answer
/// delivery failures are reported to the user and logged.
pub async fn process_text(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    text: &str,
    services: &ServiceFactory,
    store: &SessionStore,
) -> Result<TurnOutcome> {
    let Some(tool) = store.take_pending(user_id) else {
        debug!(user_id = user_id, "No pending tool, ignoring text message");
        return Ok(TurnOutcome::Ignored);
    };

    debug!(user_id = user_id, tool = %tool, input_chars = text.chars().count(), "Processing tool input");

    bot.send_message(chat_id, texts::PROCESSING).await?;

    let system_prompt = services.prompts.resolve(Some(tool));
    let started = Instant::now();

    match deliver_answer(bot, chat_id, services, system_prompt, text).await {
        Ok(chunks) => {
            logging::log_completion(
                user_id,
                tool,
                services.completion.name(),
                started.elapsed().as_millis() as u64,
                chunks,
            );
            Ok(TurnOutcome::Answered { tool, chunks })
        }
        Err(e) => {
            error!(
                user_id = user_id,
                tool = %tool,
                backend = services.completion.name(),
                severity = %e.severity(),
                error = %e,
                "Completion turn failed"
            );

            if let Err(send_err) = bot.send_message(chat_id, texts::COMPLETION_FAILED).await {
                warn!(user_id = user_id, error = %send_err, "Failed to send failure notice");
            }

            Ok(TurnOutcome::Failed { tool })
        }
    }
}

/// Ask the backend and send the answer in order, then the restart prompt
async fn deliver_answer(
    bot: &Bot,
    chat_id: ChatId,
    services: &ServiceFactory,
    system_prompt: &str,
    text: &str,
) -> Result<usize> {
    let answer = services.completion.complete(system_prompt, text).await?;
    let chunks = chunk_text(&answer, MESSAGE_CHUNK_LIMIT);

    for chunk in &chunks {
        bot.send_message(chat_id, *chunk).await?;
    }

    bot.send_message(chat_id, texts::RUN_ANOTHER)
        .reply_markup(texts::tools_keyboard(texts::OPEN_TOOLS_AGAIN, &services.tools_url))
        .await?;

    Ok(chunks.len())
}
