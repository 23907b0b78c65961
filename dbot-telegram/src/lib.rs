//! # dbot-telegram
//!
//! Telegram transport layer: adapters from teloxide types to dbot-core types, a [`dbot_core::Bot`]
//! implementation, Telegram connection config, and the polling runner that feeds a
//! [`handler_chain::HandlerChain`]. No business logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_parse_mode, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{resolve_bot_username, run_repl};
