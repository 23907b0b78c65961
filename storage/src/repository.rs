use async_trait::async_trait;

use crate::models::UpdateOutcome;

/// Writes the available-units count of the locations owned by a Telegram user.
///
/// Implementations update every record whose `owner_telegram_id` equals `owner_telegram_id` and
/// report the modified records. They never create, list or delete records, and never retry.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn set_available_units(&self, owner_telegram_id: i64, units: u32) -> UpdateOutcome;
}
