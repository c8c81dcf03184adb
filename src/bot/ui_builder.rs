//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::markdown;

use crate::menus::Menu;

/// Create an inline keyboard with one button per row
pub fn create_menu_keyboard(menu: &Menu) -> InlineKeyboardMarkup {
    let rows = menu.options.iter().map(|option| {
        vec![InlineKeyboardButton::callback(
            option.label.clone(),
            option.data.clone(),
        )]
    });

    InlineKeyboardMarkup::new(rows)
}

/// Format the final answer as MarkdownV2 with an embedded link
pub fn format_link_answer(caption: &str, label: &str, url: &str) -> String {
    format!(
        "{} [{}]({})",
        markdown::escape(caption),
        markdown::escape(label),
        markdown::escape_link_url(url)
    )
}
