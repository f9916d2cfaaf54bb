use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::ParkingRecord;

/// Derived snapshot of the parking state at one instant. Recomputed after
/// every mutation or settings change, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingStatus {
    pub is_currently_parked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_record: Option<ParkingRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_due: Option<DateTime<Utc>>,
    pub is_overdue: bool,
    /// Whole hours until the due time, rounded up; negative once overdue,
    /// zero when nothing is parked.
    pub hours_until_due: i64,
    /// Full history, most recently created first.
    pub all_records: Vec<ParkingRecord>,
}

impl ParkingStatus {
    /// Status when no episode is active.
    pub fn idle(all_records: Vec<ParkingRecord>) -> Self {
        Self {
            is_currently_parked: false,
            current_record: None,
            next_payment_due: None,
            is_overdue: false,
            hours_until_due: 0,
            all_records,
        }
    }
}
