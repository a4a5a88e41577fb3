//! Millisecond-precision instants.
//!
//! Birthdays and query bounds travel as epoch milliseconds, so every instant
//! entering the domain is cut down to that precision.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};

use crate::error::DomainError;

/// Converts epoch milliseconds (the storage and query representation of a
/// birthday) into a UTC instant.
///
/// # Examples
///
/// ```
/// use roster_domain::common::datetime_from_millis;
/// use chrono::Datelike;
///
/// let dt = datetime_from_millis(946_684_800_000).unwrap();
/// assert_eq!(dt.year(), 2000);
/// ```
///
/// # Errors
///
/// Returns `DomainError::Parse` when the value is outside chrono's range.
pub fn datetime_from_millis(millis: i64) -> Result<DateTime<Utc>, DomainError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| DomainError::parse(format!("timestamp out of range: {millis}")))
}

/// Drops everything below the millisecond.
pub fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}
