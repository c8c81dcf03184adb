//! # Course Info Bot
//!
//! A Telegram bot that walks students through picking their department,
//! year and semester, then replies with the link to the matching course
//! channel.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod engine;
pub mod engine_errors;
pub mod links;
pub mod localization;
pub mod logging;
pub mod menus;
