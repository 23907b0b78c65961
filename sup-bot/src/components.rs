//! Component factory: assembles the handler chain from injected dependencies.

use dbot_core::Bot;
use handler_chain::HandlerChain;
use std::sync::Arc;
use storage::LocationRepository;

use crate::handlers::{AvailabilityHandler, LoggingHandler, StartHandler};

/// Builds the dispatch chain: logging around `/start` and the availability text handler.
/// `/start` and plain text are disjoint kinds, so at most one of them replies per message.
/// `bot_username` lets `/start@name` for other bots be ignored.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    repo: Arc<dyn LocationRepository>,
    bot_username: Option<String>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), bot_username)))
        .add_handler(Arc::new(AvailabilityHandler::new(bot, repo)))
}
