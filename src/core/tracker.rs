//! High-level facade composing the record store, settings holder, and status
//! engine into the surface presentation layers consume.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::settings::SettingsHolder;
use crate::core::status::derive_status;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::record::ParkingRecord;
use crate::models::status::ParkingStatus;
use crate::storage::{KvStore, SqliteStore};
use crate::utils::clock::{Clock, SystemClock};

type StatusListener = Box<dyn Fn(&ParkingStatus)>;

/// Single entry point for UI and notification layers. Every mutation
/// re-derives the status and pushes the fresh snapshot to subscribers;
/// [`ParkingTracker::status`] serves the polling side of the feed.
pub struct ParkingTracker {
    store: RecordStore,
    settings: SettingsHolder,
    clock: Arc<dyn Clock>,
    listeners: Vec<StatusListener>,
}

impl ParkingTracker {
    pub fn new(
        records_storage: Box<dyn KvStore>,
        settings_storage: Box<dyn KvStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: RecordStore::new(records_storage, clock.clone()),
            settings: SettingsHolder::new(settings_storage),
            clock,
            listeners: Vec::new(),
        }
    }

    /// Open a tracker over the default SQLite database with the system clock.
    pub fn open_default() -> AppResult<Self> {
        Self::open_at(&SqliteStore::default_path())
    }

    /// Open a tracker over the SQLite database at `path`.
    pub fn open_at(path: &std::path::Path) -> AppResult<Self> {
        let records = SqliteStore::open(path)?;
        let settings = SqliteStore::open(path)?;
        Ok(Self::new(
            Box::new(records),
            Box::new(settings),
            Arc::new(SystemClock),
        ))
    }

    /// Latest status snapshot.
    pub fn status(&self) -> ParkingStatus {
        derive_status(
            self.store.records(),
            self.settings.max_parking_hours(),
            self.clock.now(),
        )
    }

    pub fn record_entry(&mut self, entry_time: Option<DateTime<Utc>>) -> ParkingRecord {
        let record = self.store.record_entry(entry_time);
        self.publish();
        record
    }

    pub fn record_exit(&mut self, exit_time: Option<DateTime<Utc>>, payment_amount: Option<f64>) {
        self.store.record_exit(exit_time, payment_amount);
        self.publish();
    }

    pub fn remove_record(&mut self, id: &str) {
        self.store.remove_record(id);
        self.publish();
    }

    /// Update the grace period; rejected values leave everything unchanged
    /// and no snapshot is published.
    pub fn set_max_parking_hours(&mut self, hours: i64) -> AppResult<()> {
        self.settings.set_max_parking_hours(hours)?;
        self.publish();
        Ok(())
    }

    pub fn max_parking_hours(&self) -> u32 {
        self.settings.max_parking_hours()
    }

    pub fn records(&self) -> &[ParkingRecord] {
        self.store.records()
    }

    /// Register a listener invoked with the fresh status after every
    /// mutation or settings change.
    pub fn subscribe(&mut self, listener: impl Fn(&ParkingStatus) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn publish(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let status = self.status();
        for listener in &self.listeners {
            listener(&status);
        }
    }
}
