//! Startup: validate config, init logging, build components, poll.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{resolve_bot_username, run_repl, TelegramBotAdapter};
use std::sync::Arc;
use storage::{LocationRepository, SupabaseLocationRepo};
use tracing::{info, instrument};

use crate::components::build_handler_chain;
use crate::config::BotConfig;

/// Main entry: validates config, initializes tracing, wires the Telegram adapter and the Supabase
/// repository into the handler chain, then polls until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let repo: Arc<dyn LocationRepository> =
        Arc::new(SupabaseLocationRepo::new(config.supabase.clone())?);

    info!(
        supabase_url = %config.supabase_url(),
        table = %config.locations_table(),
        log_file = %config.log_file(),
        "Starting bot"
    );

    let bot_username = resolve_bot_username(&teloxide_bot).await;
    let handler_chain = build_handler_chain(bot, repo, bot_username);
    run_repl(teloxide_bot, handler_chain).await?;

    info!("Bot stopped");
    Ok(())
}
