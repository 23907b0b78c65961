//! Result of a single conditional update.

use crate::error::StorageError;
use crate::models::LocationRecord;

/// Closed set of outcomes of [`crate::LocationRepository::set_available_units`].
///
/// Zero modified rows and an unknown owner are the same case: [`UpdateOutcome::NotFound`].
#[derive(Debug)]
pub enum UpdateOutcome {
    /// At least one record was modified; holds the modified records as returned by the store.
    Updated(Vec<LocationRecord>),
    /// No record matched the owner filter.
    NotFound,
    /// The call failed (transport, API status, or decoding).
    Failed(StorageError),
}

impl UpdateOutcome {
    /// `Updated` for a non-empty row list, `NotFound` otherwise.
    pub fn from_rows(rows: Vec<LocationRecord>) -> Self {
        if rows.is_empty() {
            Self::NotFound
        } else {
            Self::Updated(rows)
        }
    }
}

impl From<Result<Vec<LocationRecord>, StorageError>> for UpdateOutcome {
    fn from(result: Result<Vec<LocationRecord>, StorageError>) -> Self {
        match result {
            Ok(rows) => Self::from_rows(rows),
            Err(e) => Self::Failed(e),
        }
    }
}
