//! Telegram connection config: bot token and optional Bot API URL.
//! Loaded from TELEGRAM_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. The token is required; the API URL is optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = non_empty_var("TELEGRAM_TOKEN")
            .or_else(|| non_empty_var("BOT_TOKEN"))
            .ok_or_else(|| anyhow::anyhow!("TELEGRAM_TOKEN environment variable not set"))?;
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Fails when the API URL is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide client, pointing it at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("invalid TELEGRAM_API_URL: {url_str}"))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

/// Set and not blank; an empty value falls through to the next variable.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["TELEGRAM_TOKEN", "BOT_TOKEN", "TELEGRAM_API_URL", "TELOXIDE_API_URL"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_api_url() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "test_token");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
        clear_env();
    }

    /// **Test: Empty primary variables fall through to their fallbacks.**
    ///
    /// **Setup:** TELEGRAM_TOKEN and TELEGRAM_API_URL set to "", fallbacks set.
    /// **Expected:** Token and API URL come from BOT_TOKEN and TELOXIDE_API_URL.
    #[test]
    #[serial]
    fn test_empty_primary_vars_use_fallbacks() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "");
        env::set_var("BOT_TOKEN", "fallback");
        env::set_var("TELEGRAM_API_URL", "  ");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "fallback");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        clear_env();
        assert!(TelegramConfig::from_env().is_err());

        env::set_var("BOT_TOKEN", "  ");
        assert!(TelegramConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_telegram_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "fallback");
        assert_eq!(TelegramConfig::from_env().unwrap().bot_token, "fallback");

        env::set_var("TELEGRAM_TOKEN", "primary");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "primary");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        clear_env();
    }

    #[test]
    fn test_invalid_api_url() {
        let config = TelegramConfig {
            bot_token: "t".to_string(),
            telegram_api_url: Some("not a url".to_string()),
        };
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }

    #[test]
    fn test_build_bot_with_api_url() {
        let config = TelegramConfig {
            bot_token: "t".to_string(),
            telegram_api_url: Some("http://localhost:8081/".to_string()),
        };
        let bot = config.build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "http://localhost:8081/");
    }
}
