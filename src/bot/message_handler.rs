//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::engine::ConversationEngine;

use super::reply_sender::deliver_replies;

/// Handle text that is neither a known command nor a button press
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    engine: Arc<ConversationEngine>,
) -> Result<()> {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    debug!(user_id = user.id.0, chars = text.len(), "Received free text");

    let outcome = engine.handle_unrecognized_text(user.id.0).await;
    deliver_replies(&bot, msg.chat.id, None, outcome.replies).await
}
