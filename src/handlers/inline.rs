//! Inline query handler
//!
//! Every inline query is answered with the same card inviting the user to
//! open the tools web app.

use teloxide::{Bot, prelude::*};
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText,
};
use tracing::debug;
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::handlers::texts;

/// Handle an inline query
pub async fn handle_inline_query(bot: Bot, query: InlineQuery, services: ServiceFactory) -> Result<()> {
    debug!(user_id = query.from.id.0, query = %query.query, "Answering inline query");

    bot.answer_inline_query(query.id.clone(), inline_results(&services.tools_url))
        .await?;

    Ok(())
}

/// The static suggestion card
pub fn inline_results(tools_url: &url::Url) -> Vec<InlineQueryResult> {
    let mut article = InlineQueryResultArticle::new(
        "1",
        texts::INLINE_TITLE,
        InputMessageContent::Text(InputMessageContentText::new(texts::INLINE_MESSAGE)),
    );
    article.description = Some(texts::INLINE_DESCRIPTION.to_string());
    article.reply_markup = Some(texts::tools_keyboard(texts::OPEN_TOOLS, tools_url));

    vec![InlineQueryResult::Article(article)]
}
