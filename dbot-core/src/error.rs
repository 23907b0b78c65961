//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for dbot operations.
#[derive(Error, Debug)]
pub enum DbotError {
    /// The transport rejected or failed to deliver a request.
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
