//! Logs each inbound message and the final response.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(). Never claims a message, so an
/// update no other handler takes still ends as `Ignore`.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_type = ?message.message_type,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Ignore => debug!(
                message_id = %message.id,
                "Message not handled"
            ),
            _ => debug!(
                message_id = %message.id,
                response = ?response,
                "Processed message"
            ),
        }
        Ok(())
    }
}
