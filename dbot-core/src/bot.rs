//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute
//! a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Formatting applied by the transport when rendering a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Sent as-is, no entity parsing.
    #[default]
    Plain,
    /// Telegram HTML subset (`<b>`, `<code>`, `<a href>`). Callers escape user-provided text.
    Html,
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message to the given chat using the given format.
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()>;

    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_formatted(chat, text, TextFormat::Plain).await
    }

    /// Sends a plain text reply to the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_formatted(&message.chat, text, TextFormat::Plain).await
    }

    /// Sends a formatted reply to the chat the message came from.
    async fn reply_formatted(&self, message: &Message, text: &str, format: TextFormat) -> Result<()> {
        self.send_formatted(&message.chat, text, format).await
    }
}
