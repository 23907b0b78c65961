//! # SUP availability bot
//!
//! Rental point owners message the bot a number; the bot writes it as the count of free SUP
//! boards into their location row in Supabase and confirms. `/start` greets the owner and shows
//! their Telegram ID, which the operator registers as the location's owner.
//!
//! Wires dbot-core (Bot, Handler, Message), handler-chain (dispatch), dbot-telegram (transport)
//! and storage (location updates). Loads config from env and runs long polling.

pub mod components;
pub mod config;
pub mod handlers;
pub mod replies;
pub mod runner;

pub use components::build_handler_chain;
pub use config::BotConfig;
pub use handlers::{parse_units, AvailabilityHandler, LoggingHandler, StartHandler};
pub use runner::run_bot;
