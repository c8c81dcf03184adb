//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{debug, warn};

use crate::engine::ConversationEngine;

use super::reply_sender::deliver_replies;

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    engine: Arc<ConversationEngine>,
) -> Result<()> {
    let user_id = q.from.id.0;
    let data = q.data.as_deref().unwrap_or("");
    debug!(user_id, data, "Received callback query from user");

    // Answer the callback query to remove the loading state
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(user_id, error = %e, "Failed to answer callback query");
    }

    let outcome = engine.handle_callback(user_id, data).await;
    debug!(user_id, stage = ?outcome.stage(), "Callback handled");

    let (chat_id, menu_message) = match &q.message {
        Some(msg) => (msg.chat().id, Some(msg.id())),
        None => (ChatId(q.from.id.0 as i64), None),
    };

    deliver_replies(&bot, chat_id, menu_message, outcome.replies).await
}
