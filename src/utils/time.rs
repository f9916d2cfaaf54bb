//! Due-time arithmetic: fixed-duration hour math on absolute timestamps.

use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Payment due time: entry plus a fixed number of hours. Exact millisecond
/// arithmetic, not calendar-day arithmetic.
pub fn payment_due(entry_time: DateTime<Utc>, max_hours: u32) -> DateTime<Utc> {
    entry_time + Duration::milliseconds(i64::from(max_hours) * MILLIS_PER_HOUR)
}

/// Whole hours from `now` until `due`, rounded up. Any positive sub-hour
/// remainder counts as a full hour, so the result only goes negative once
/// `due` is strictly in the past.
pub fn hours_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ceil_hours((due - now).num_milliseconds())
}

fn ceil_hours(diff_ms: i64) -> i64 {
    (diff_ms + MILLIS_PER_HOUR - 1).div_euclid(MILLIS_PER_HOUR)
}
