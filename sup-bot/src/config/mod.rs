//! Bot configuration: Telegram connection, Supabase connection, log file. Loaded from env.
//!
//! Missing credentials are a startup error; the bot never starts polling without them.

mod bot_config;


pub use bot_config::{BotConfig, DEFAULT_LOG_FILE};
