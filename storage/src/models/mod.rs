mod location_record;
mod update_outcome;

pub use location_record::LocationRecord;
pub use update_outcome::UpdateOutcome;
