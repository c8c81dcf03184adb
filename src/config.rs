//! # Bot Configuration Module
//!
//! Settings are read from the process environment (after `.env` loading).
//! `BotConfig::from_lookup` takes any key lookup so tests never touch the
//! real environment.

use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::links::{LinkTable, FALLBACK_DEFAULT_LINK};

pub const DEFAULT_WEBHOOK_BIND_ADDR: &str = "0.0.0.0:8000";

/// Webhook transport settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Public HTTPS URL Telegram posts updates to
    pub url: String,
    /// Local address the webhook server listens on
    pub bind_addr: SocketAddr,
}

/// How updates reach the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Polling,
    Webhook(WebhookConfig),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub transport: Transport,
    pub links: LinkTable,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = non_empty(&lookup, "TELEGRAM_BOT_TOKEN")
            .context("TELEGRAM_BOT_TOKEN must be set")?;

        let transport = match non_empty(&lookup, "WEBHOOK_URL") {
            Some(url) => {
                let bind_addr = non_empty(&lookup, "WEBHOOK_BIND_ADDR")
                    .unwrap_or_else(|| DEFAULT_WEBHOOK_BIND_ADDR.to_string());
                let bind_addr = bind_addr
                    .parse()
                    .with_context(|| format!("Invalid WEBHOOK_BIND_ADDR: {bind_addr}"))?;
                if !url.starts_with("https://") {
                    bail!("WEBHOOK_URL must be an https:// URL, got {url}");
                }
                Transport::Webhook(WebhookConfig { url, bind_addr })
            }
            None => Transport::Polling,
        };

        let default_link = non_empty(&lookup, "DEFAULT_LINK")
            .unwrap_or_else(|| FALLBACK_DEFAULT_LINK.to_string());
        let mut links = LinkTable::new(default_link);

        if let Some(path) = non_empty(&lookup, "LINKS_FILE") {
            links.load_json_file(&path)?;
        }
        // Environment entries override the file
        links.load_from(&lookup);

        Ok(Self {
            bot_token,
            transport,
            links,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let err = BotConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_polling_by_default() {
        let config = BotConfig::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.transport, Transport::Polling);
        assert_eq!(config.links.default_link(), FALLBACK_DEFAULT_LINK);
        assert!(config.links.is_empty());
    }

    #[test]
    fn test_webhook_settings() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("WEBHOOK_URL", "https://bot.example.org/webhook"),
        ]))
        .unwrap();

        match config.transport {
            Transport::Webhook(webhook) => {
                assert_eq!(webhook.url, "https://bot.example.org/webhook");
                assert_eq!(webhook.bind_addr, "0.0.0.0:8000".parse().unwrap());
            }
            other => panic!("Expected webhook transport, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("WEBHOOK_URL", "https://bot.example.org/webhook"),
            ("WEBHOOK_BIND_ADDR", "not-an-address"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_http_webhook_rejected() {
        let result = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("WEBHOOK_URL", "http://bot.example.org/webhook"),
        ]));
        assert!(result.is_err());
    }
}
