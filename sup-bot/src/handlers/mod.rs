//! Handlers: one per update kind, plus logging around the whole chain.

mod availability_handler;
mod logging_handler;
mod start_handler;

pub use availability_handler::{parse_units, AvailabilityHandler};
pub use logging_handler::LoggingHandler;
pub use start_handler::StartHandler;
