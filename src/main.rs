use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use course_info_bot::bot::{schema, Command};
use course_info_bot::config::{BotConfig, Transport};
use course_info_bot::engine::ConversationEngine;
use course_info_bot::localization::init_localization;
use course_info_bot::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing()?;
    init_localization();

    let config = BotConfig::from_env()?;
    info!(
        configured_links = config.links.len(),
        default_link = %config.links.default_link(),
        "Starting Course Info Bot"
    );

    let bot = Bot::new(config.bot_token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let engine = Arc::new(ConversationEngine::new(config.links));

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![engine])
        .enable_ctrlc_handler()
        .build();

    match config.transport {
        Transport::Polling => {
            info!("Bot initialized, starting long polling");
            dispatcher.dispatch().await;
        }
        Transport::Webhook(webhook) => {
            info!(url = %webhook.url, bind_addr = %webhook.bind_addr, "Bot initialized, starting webhook server");
            let options = webhooks::Options::new(webhook.bind_addr, webhook.url.parse()?);
            let listener = webhooks::axum(bot, options).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    Ok(())
}
