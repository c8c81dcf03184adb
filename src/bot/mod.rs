//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `command_handler`: Handles the /start and /stop commands
//! - `message_handler`: Handles free-form text messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats the final answer
//! - `reply_sender`: Delivers the engine's replies to a chat

pub mod callback_handler;
pub mod command_handler;
pub mod message_handler;
pub mod reply_sender;
pub mod ui_builder;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use command_handler::{command_handler, Command};
pub use message_handler::message_handler;

/// Update routing: commands, then any other message, then button presses
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let message_branch = Update::filter_message()
        .branch(dptree::entry().filter_command::<Command>().endpoint(command_handler))
        .branch(dptree::endpoint(message_handler));

    dptree::entry()
        .branch(message_branch)
        .branch(Update::filter_callback_query().endpoint(callback_handler))
}
