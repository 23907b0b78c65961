//! Storage error types.
//!
//! Carried inside [`crate::UpdateOutcome::Failed`]; callers log them, they never reach users.

use thiserror::Error;

/// Errors that can occur when talking to the data store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Request could not be built or sent, or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The data store answered with a non-success status.
    #[error("Data store API error ({status}): {body}")]
    Api { status: u16, body: String },
    /// The response body was not the expected JSON shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
    #[error("Invalid storage config: {0}")]
    Config(String),
}
