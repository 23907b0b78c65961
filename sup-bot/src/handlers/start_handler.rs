//! `/start`: greets the sender and tells them their Telegram ID.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result, TextFormat, UpdateKind};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::replies;

/// Replies to `/start` with an HTML greeting; ignores everything else, including
/// `/start@other_bot` in group chats.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl StartHandler {
    /// `bot_username` is this bot's own username (from getMe); `None` when it could not be
    /// resolved, in which case mentions are not checked.
    pub fn new(bot: Arc<dyn Bot>, bot_username: Option<String>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = match UpdateKind::of(message) {
            UpdateKind::Command(command) if command.is("start") => command,
            _ => return Ok(HandlerResponse::Ignore),
        };
        if !command.is_addressed_to(self.bot_username.as_deref()) {
            debug!(mention = ?command.mention, "/start addressed to another bot");
            return Ok(HandlerResponse::Ignore);
        }

        let text = replies::greeting(message.user.id, message.user.display_name());
        match self
            .bot
            .reply_formatted(message, &text, TextFormat::Html)
            .await
        {
            Ok(()) => info!(user_id = message.user.id, "Sent greeting"),
            Err(e) => error!(user_id = message.user.id, error = %e, "Failed to send greeting"),
        }
        Ok(HandlerResponse::Reply(text))
    }
}
