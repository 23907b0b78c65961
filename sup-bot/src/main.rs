//! Binary entry point: loads `.env` and the environment, then polls Telegram until terminated.

use anyhow::Result;
use sup_bot::{run_bot, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = BotConfig::load()?;
    run_bot(config).await
}
