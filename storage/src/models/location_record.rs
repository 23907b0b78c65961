//! Location record model.
//!
//! Maps a row of the `locations` table. Only the columns the bot reads are decoded; other columns
//! are ignored, and every field is optional because the row is not owned by this system.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "availableSups")]
    pub available_units: Option<i64>,
    #[serde(default)]
    pub owner_telegram_id: Option<i64>,
}

impl LocationRecord {
    /// Display name of the location, or `fallback` when the name is missing or blank.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
    }
}
