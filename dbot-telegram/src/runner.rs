//! Polling runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use anyhow::Result;
use dbot_core::{HandlerResponse, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Calls get_me() to find out which bot is serving and returns its username.
/// A failed call is logged and yields `None`; startup continues without it.
#[instrument(skip(bot))]
pub async fn resolve_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            info!(
                bot_id = me.user.id.0,
                username = %me.user.username.as_deref().unwrap_or("-"),
                "Bot identity resolved"
            );
            me.user.username.clone()
        }
        Err(e) => {
            warn!(error = %e, "get_me failed, continuing without bot username");
            None
        }
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain. Returns when polling stops
/// (e.g. Ctrl-C).
///
/// Every message is converted to core::Message and dispatched through `handler_chain`; chain
/// errors are logged and never stop the loop.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    info!("Starting polling");
    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = ?core_msg.message_type,
                "Received update"
            );

            match chain.handle(&core_msg).await {
                Ok(HandlerResponse::Ignore) => {
                    debug!(user_id = core_msg.user.id, "No handler for update, ignored")
                }
                Ok(_) => {}
                Err(e) => error!(error = %e, user_id = core_msg.user.id, "Handler chain failed"),
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
