use serde::{Deserialize, Serialize};

/// Default grace period: 7 days.
pub const DEFAULT_MAX_HOURS: u32 = 168;
/// Smallest accepted grace period.
pub const MIN_MAX_HOURS: u32 = 1;
/// Largest accepted grace period: one year.
pub const MAX_MAX_HOURS: u32 = 8760;

/// User-configurable settings, persisted as their own blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Hours of free/grace parking before payment is due.
    #[serde(default = "default_max_hours")]
    pub max_parking_hours: u32,
}

fn default_max_hours() -> u32 {
    DEFAULT_MAX_HOURS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_parking_hours: DEFAULT_MAX_HOURS,
        }
    }
}

impl Settings {
    /// Whether a user-supplied grace period is acceptable.
    pub fn in_range(hours: i64) -> bool {
        (i64::from(MIN_MAX_HOURS)..=i64::from(MAX_MAX_HOURS)).contains(&hours)
    }
}
