//! Plain text: "set availability". The text must be a bare number; it becomes the count of free
//! SUP boards at every location owned by the sender.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result, TextFormat, UpdateKind};
use std::sync::Arc;
use storage::{LocationRepository, UpdateOutcome};
use tracing::{error, info, instrument, warn};

use crate::replies;

/// Parses a count: ASCII digits only, no sign, no whitespace, fits in `u32`.
pub fn parse_units(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Handles non-command text: validates the number, updates the sender's location, replies.
///
/// Never returns an error: storage failures and failed sends are logged and answered with a
/// generic apology where possible.
pub struct AvailabilityHandler {
    bot: Arc<dyn Bot>,
    repo: Arc<dyn LocationRepository>,
}

impl AvailabilityHandler {
    pub fn new(bot: Arc<dyn Bot>, repo: Arc<dyn LocationRepository>) -> Self {
        Self { bot, repo }
    }

    /// Sends a reply. When it fails, falls back to the apology once, then gives up.
    async fn reply(&self, message: &Message, text: &str, format: TextFormat) -> String {
        let user_id = message.user.id;
        let Err(e) = self.bot.reply_formatted(message, text, format).await else {
            return text.to_string();
        };
        error!(user_id, error = %e, "Failed to send reply");
        if text == replies::UNEXPECTED_ERROR {
            return text.to_string();
        }
        if let Err(e) = self.bot.reply_to(message, replies::UNEXPECTED_ERROR).await {
            error!(user_id, error = %e, "Failed to send error reply");
        }
        replies::UNEXPECTED_ERROR.to_string()
    }
}

#[async_trait]
impl Handler for AvailabilityHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if UpdateKind::of(message) != UpdateKind::Text {
            return Ok(HandlerResponse::Ignore);
        }
        let user_id = message.user.id;

        let Some(units) = parse_units(&message.content) else {
            let sent = self
                .reply(message, replies::NOT_A_NUMBER, TextFormat::Plain)
                .await;
            return Ok(HandlerResponse::Reply(sent));
        };

        let (text, format) = match self.repo.set_available_units(user_id, units).await {
            UpdateOutcome::Updated(records) => {
                let location = records
                    .first()
                    .map(|r| r.name_or(replies::UNTITLED))
                    .unwrap_or(replies::UNTITLED);
                info!(
                    user_id,
                    units,
                    location = %location,
                    "Updated available units"
                );
                (
                    replies::availability_updated(location, units),
                    TextFormat::Html,
                )
            }
            UpdateOutcome::NotFound => {
                warn!(user_id, "Owner with this Telegram ID not found in Supabase");
                (replies::LOCATION_NOT_FOUND.to_string(), TextFormat::Plain)
            }
            UpdateOutcome::Failed(e) => {
                error!(
                    user_id,
                    units,
                    error = %e,
                    error_debug = ?e,
                    "Unexpected error while updating available units"
                );
                (replies::UNEXPECTED_ERROR.to_string(), TextFormat::Plain)
            }
        };

        let sent = self.reply(message, &text, format).await;
        Ok(HandlerResponse::Reply(sent))
    }
}
