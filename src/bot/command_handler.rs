//! Command Handler module for the bot's slash commands

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::debug;

use crate::engine::ConversationEngine;

use super::reply_sender::deliver_replies;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "find your course channel")]
    Start,
    #[command(description = "stop the conversation")]
    Stop,
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    engine: Arc<ConversationEngine>,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = %msg.chat.id, "Ignoring command without sender");
        return Ok(());
    };
    debug!(user_id = user.id.0, command = ?cmd, "Received command");

    let outcome = match cmd {
        Command::Start => engine.handle_start(user.id.0).await,
        Command::Stop => engine.handle_stop(user.id.0).await,
    };

    deliver_replies(&bot, msg.chat.id, None, outcome.replies).await
}
