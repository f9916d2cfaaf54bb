//! parktracker library root.
//! Local parking-session tracking: entry/exit records, a derived due/overdue
//! payment status, and local notification scheduling.

pub mod core;
pub mod errors;
pub mod models;
pub mod notify;
pub mod storage;
pub mod utils;

pub use crate::core::settings::SettingsHolder;
pub use crate::core::status::derive_status;
pub use crate::core::store::RecordStore;
pub use crate::core::tracker::ParkingTracker;
pub use crate::errors::{AppError, AppResult};
pub use crate::models::record::ParkingRecord;
pub use crate::models::settings::{DEFAULT_MAX_HOURS, Settings};
pub use crate::models::status::ParkingStatus;
pub use crate::notify::{NotificationScheduler, Notifier, Severity};
pub use crate::storage::{KvStore, MemoryStore, SqliteStore};
pub use crate::utils::clock::{Clock, SystemClock};
