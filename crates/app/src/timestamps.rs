//! Lifecycle timestamp helpers.

use jiff::{SignedDuration, Timestamp};

/// Current time at the microsecond precision `TIMESTAMPTZ` stores.
pub(crate) fn now_utc() -> Timestamp {
    truncate_to_micros(Timestamp::now())
}

pub(crate) fn truncate_to_micros(timestamp: Timestamp) -> Timestamp {
    Timestamp::from_microsecond(timestamp.as_microsecond()).unwrap_or(timestamp)
}

/// Pick the `updated_at_utc` for an update happening at `now`.
///
/// The result is never before `created_at` and always strictly after `previous`,
/// even when the clock has not advanced a full microsecond since the last update.
pub(crate) fn next_update_timestamp(
    now: Timestamp,
    created_at: Timestamp,
    previous: Option<Timestamp>,
) -> Timestamp {
    let floor = previous.map_or(created_at, |previous| {
        previous
            .checked_add(SignedDuration::from_micros(1))
            .unwrap_or(previous)
    });

    now.max(floor)
}
