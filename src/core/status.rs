//! Status engine: pure derivation of a [`ParkingStatus`] snapshot from the
//! record collection and the configured grace period.

use chrono::{DateTime, Utc};
use log::warn;

use crate::models::record::ParkingRecord;
use crate::models::status::ParkingStatus;
use crate::utils::time::{hours_until, payment_due};

/// Derive the parking status at instant `now`.
///
/// Deterministic for a given input: the caller supplies `now` rather than
/// the engine reading the system clock. At most one record should be active;
/// if loaded data violates that, the most recently created candidate is
/// treated as authoritative and the anomaly is logged rather than escalated.
pub fn derive_status(
    records: &[ParkingRecord],
    max_hours: u32,
    now: DateTime<Utc>,
) -> ParkingStatus {
    let active = find_active(records);

    let mut all_records = records.to_vec();
    all_records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let Some(active) = active else {
        return ParkingStatus::idle(all_records);
    };

    let due = payment_due(active.entry_time, max_hours);
    let hours_until_due = hours_until(due, now);

    ParkingStatus {
        is_currently_parked: true,
        current_record: Some(active.clone()),
        next_payment_due: Some(due),
        // Exactly zero remaining is the due boundary, not yet overdue.
        is_overdue: hours_until_due < 0,
        hours_until_due,
        all_records,
    }
}

fn find_active(records: &[ParkingRecord]) -> Option<&ParkingRecord> {
    let mut best: Option<&ParkingRecord> = None;
    let mut count = 0usize;
    for rec in records.iter().filter(|r| r.is_active) {
        count += 1;
        best = match best {
            Some(b) if b.created_at > rec.created_at => Some(b),
            _ => Some(rec),
        };
    }
    if count > 1 {
        warn!("{count} active parking records found, expected at most one; using the most recent");
    }
    best
}
