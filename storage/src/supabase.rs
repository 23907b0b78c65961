//! Supabase-backed location repository.
//!
//! Talks to the PostgREST endpoint of a Supabase project:
//! `PATCH {url}/rest/v1/{table}?owner_telegram_id=eq.{id}` with body `{"availableSups": n}` and
//! `Prefer: return=representation`, so the response lists exactly the modified rows. The service
//! key is sent both as `apikey` and as a bearer token.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::models::{LocationRecord, UpdateOutcome};
use crate::repository::LocationRepository;

pub const DEFAULT_LOCATIONS_TABLE: &str = "locations";
const OWNER_COLUMN: &str = "owner_telegram_id";

/// Connection settings for the Supabase REST API.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub url: Url,
    /// Service role key; bypasses row-level security.
    pub service_key: String,
    /// Table holding the location rows.
    pub table: String,
}

impl SupabaseConfig {
    /// Builds a config for the default `locations` table. Fails when `url` is not a valid URL.
    pub fn new(url: &str, service_key: impl Into<String>) -> Result<Self, StorageError> {
        let url = Url::parse(url)
            .map_err(|e| StorageError::Config(format!("invalid Supabase URL {url:?}: {e}")))?;
        Ok(Self {
            url,
            service_key: service_key.into(),
            table: DEFAULT_LOCATIONS_TABLE.to_string(),
        })
    }

    /// Uses a different table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// REST endpoint for the configured table.
    pub fn table_endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.url.as_str().trim_end_matches('/'),
            self.table
        )
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url.as_str())
            .field("service_key", &"***")
            .field("table", &self.table)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct AvailabilityPatch {
    #[serde(rename = "availableSups")]
    available_units: u32,
}

/// [`LocationRepository`] over the Supabase REST API.
#[derive(Debug, Clone)]
pub struct SupabaseLocationRepo {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseLocationRepo {
    /// Creates a repository with its own HTTP client.
    pub fn new(config: SupabaseConfig) -> Result<Self, StorageError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    async fn patch_available_units(
        &self,
        owner_telegram_id: i64,
        units: u32,
    ) -> Result<Vec<LocationRecord>, StorageError> {
        let endpoint = self.config.table_endpoint();
        debug!(endpoint = %endpoint, owner_telegram_id, units, "Supabase PATCH request");

        let response = self
            .client
            .patch(&endpoint)
            .query(&[(OWNER_COLUMN, format!("eq.{owner_telegram_id}"))])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .header("Prefer", "return=representation")
            .json(&AvailabilityPatch {
                available_units: units,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StorageError::Decode(format!("{e}: {body}")))
    }
}

#[async_trait]
impl LocationRepository for SupabaseLocationRepo {
    #[instrument(skip(self))]
    async fn set_available_units(&self, owner_telegram_id: i64, units: u32) -> UpdateOutcome {
        let outcome =
            UpdateOutcome::from(self.patch_available_units(owner_telegram_id, units).await);
        match &outcome {
            UpdateOutcome::Updated(rows) => {
                info!(owner_telegram_id, units, rows = rows.len(), "Supabase update applied")
            }
            UpdateOutcome::NotFound => {
                debug!(owner_telegram_id, "Supabase update matched no rows")
            }
            UpdateOutcome::Failed(e) => {
                debug!(table = %self.config.table, error = %e, "Supabase update failed")
            }
        }
        outcome
    }
}
