//! BotConfig: TelegramConfig + SupabaseConfig + log file. Use load() for env-based loading.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use storage::{SupabaseConfig, DEFAULT_LOCATIONS_TABLE};

pub const DEFAULT_LOG_FILE: &str = "logs/sup-bot.log";

/// Full bot config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub supabase: SupabaseConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables:
    /// TELEGRAM_TOKEN (or BOT_TOKEN), SUPABASE_URL and SUPABASE_SERVICE_KEY are required;
    /// SUPABASE_LOCATIONS_TABLE, TELEGRAM_API_URL and LOG_FILE are optional.
    pub fn load() -> Result<Self> {
        let telegram = TelegramConfig::from_env()?;

        let url = non_empty_var("SUPABASE_URL");
        let key = non_empty_var("SUPABASE_SERVICE_KEY");
        let (Some(url), Some(key)) = (url, key) else {
            anyhow::bail!("Supabase URL and Key must be set in environment variables (SUPABASE_URL, SUPABASE_SERVICE_KEY)");
        };
        let table = non_empty_var("SUPABASE_LOCATIONS_TABLE")
            .unwrap_or_else(|| DEFAULT_LOCATIONS_TABLE.to_string());
        let supabase = SupabaseConfig::new(&url, key)?.with_table(table);

        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            supabase,
            log_file,
        })
    }

    /// Validates config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn supabase_url(&self) -> &str {
        self.supabase.url.as_str()
    }
    pub fn locations_table(&self) -> &str {
        &self.supabase.table
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
