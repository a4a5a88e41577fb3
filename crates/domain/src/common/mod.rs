//! Shared conversion helpers.

mod datetime;

pub use datetime::{datetime_from_millis, truncate_to_millis};
