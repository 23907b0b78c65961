//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result, TextFormat};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

/// Maps a core text format to the Telegram parse mode, `None` for plain text.
pub fn to_parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let request = match to_parse_mode(format) {
            Some(mode) => request.parse_mode(mode),
            None => request,
        };
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
