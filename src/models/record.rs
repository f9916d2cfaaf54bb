use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parking episode. Serialized with camelCase field names to stay
/// compatible with the stored blob format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRecord {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// When the vehicle was parked. May be backdated by the user; immutable
    /// after creation.
    pub entry_time: DateTime<Utc>,
    /// Set exactly once when the episode closes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,
    /// Amount paid at exit, when any. Never required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
    /// True iff this is the episode currently in progress. At most one record
    /// in a collection may be active.
    pub is_active: bool,
    /// Creation instant in epoch milliseconds. Used only for sort ordering;
    /// distinct from `entry_time`, which the user may backdate.
    pub created_at: i64,
}

impl ParkingRecord {
    /// Build a freshly opened (active) record.
    pub fn open(id: String, entry_time: DateTime<Utc>, created_at: i64) -> Self {
        Self {
            id,
            entry_time,
            exit_time: None,
            payment_amount: None,
            is_active: true,
            created_at,
        }
    }

    /// Whether the episode was never closed. A superseded record can be
    /// inactive yet still open.
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}
