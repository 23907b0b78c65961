//! Storage crate: location records in the hosted data store and the repository abstraction used
//! to update them.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – LocationRecord, UpdateOutcome
//! - [`repository`] – LocationRepository trait
//! - [`supabase`] – SupabaseLocationRepo (PostgREST over HTTPS)

mod error;
mod models;
mod repository;
mod supabase;

pub use error::StorageError;
pub use models::{LocationRecord, UpdateOutcome};
pub use repository::LocationRepository;
pub use supabase::{SupabaseConfig, SupabaseLocationRepo, DEFAULT_LOCATIONS_TABLE};
