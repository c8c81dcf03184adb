//! Reply Sender module for delivering engine replies to Telegram

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::{debug, warn};

use crate::menus::{RenderMode, Reply};

use super::ui_builder::{create_menu_keyboard, format_link_answer};

/// Deliver replies in order.
///
/// Edit-mode replies replace `menu_message` when there is one; otherwise, or
/// when Telegram refuses the edit, they are sent as new messages.
pub async fn deliver_replies(
    bot: &Bot,
    chat_id: ChatId,
    menu_message: Option<MessageId>,
    replies: Vec<Reply>,
) -> Result<()> {
    for reply in replies {
        match reply {
            Reply::Text(text) => {
                bot.send_message(chat_id, text).await?;
            }
            Reply::Menu { mode, menu } => {
                let keyboard = create_menu_keyboard(&menu);
                let target = edit_target(mode, menu_message);
                render(bot, chat_id, target, menu.prompt, Some(keyboard), None).await?;
            }
            Reply::Link {
                mode,
                caption,
                label,
                url,
            } => {
                let text = format_link_answer(&caption, &label, &url);
                let target = edit_target(mode, menu_message);
                render(bot, chat_id, target, text, None, Some(ParseMode::MarkdownV2)).await?;
            }
        }
    }

    Ok(())
}

fn edit_target(mode: RenderMode, menu_message: Option<MessageId>) -> Option<MessageId> {
    match mode {
        RenderMode::Edit => menu_message,
        RenderMode::Send => None,
    }
}

async fn render(
    bot: &Bot,
    chat_id: ChatId,
    target: Option<MessageId>,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
    parse_mode: Option<ParseMode>,
) -> Result<()> {
    if let Some(message_id) = target {
        let mut request = bot.edit_message_text(chat_id, message_id, text.clone());
        if let Some(keyboard) = &keyboard {
            request = request.reply_markup(keyboard.clone());
        }
        if let Some(parse_mode) = parse_mode {
            request = request.parse_mode(parse_mode);
        }

        match request.await {
            Ok(_) => return Ok(()),
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(chat_id = %chat_id, "Menu already up to date");
                return Ok(());
            }
            Err(e) => {
                warn!(chat_id = %chat_id, error = %e, "Failed to edit menu message, sending a new one");
            }
        }
    }

    let mut request = bot.send_message(chat_id, text);
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    if let Some(parse_mode) = parse_mode {
        request = request.parse_mode(parse_mode);
    }
    request.await?;

    Ok(())
}
