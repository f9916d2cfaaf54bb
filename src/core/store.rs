//! Record store: sole owner and writer of the parking-record collection,
//! written through to storage after every mutation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::models::record::ParkingRecord;
use crate::storage::{KvStore, RECORDS_KEY};
use crate::utils::clock::Clock;
use crate::utils::id::generate_id;

pub struct RecordStore {
    records: Vec<ParkingRecord>,
    storage: Box<dyn KvStore>,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// Open the store and restore any persisted history.
    pub fn new(storage: Box<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self {
            records: Vec::new(),
            storage,
            clock,
        };
        store.records = store.load_all();
        store
    }

    /// Restore the record collection from storage. A missing key means no
    /// history yet; an unparseable blob is logged and treated the same way.
    pub fn load_all(&self) -> Vec<ParkingRecord> {
        let Some(blob) = self.storage.get(RECORDS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!("could not parse stored parking records, starting empty: {e}");
                Vec::new()
            }
        }
    }

    pub fn records(&self) -> &[ParkingRecord] {
        &self.records
    }

    /// Start a new parking episode, backdated to `entry_time` when supplied.
    ///
    /// Any currently active record is deactivated first. Its exit time is
    /// left untouched: a superseded episode stays open without an exit.
    pub fn record_entry(&mut self, entry_time: Option<DateTime<Utc>>) -> ParkingRecord {
        let now = self.clock.now();
        let entry_time = entry_time.unwrap_or(now);

        for rec in self.records.iter_mut().filter(|r| r.is_active) {
            rec.is_active = false;
        }

        let now_millis = now.timestamp_millis();
        let record = ParkingRecord::open(generate_id(now_millis), entry_time, now_millis);
        self.records.push(record.clone());
        self.persist();
        record
    }

    /// Close the active episode, stamping its exit time once. A no-op when
    /// nothing is active. Negative payment amounts are discarded.
    pub fn record_exit(&mut self, exit_time: Option<DateTime<Utc>>, payment_amount: Option<f64>) {
        let exit_time = exit_time.unwrap_or_else(|| self.clock.now());
        let amount = match payment_amount {
            Some(a) if a < 0.0 => {
                warn!("discarding negative payment amount {a}");
                None
            }
            other => other,
        };

        let Some(rec) = self.records.iter_mut().find(|r| r.is_active) else {
            return;
        };
        rec.exit_time = Some(exit_time);
        rec.payment_amount = amount;
        rec.is_active = false;
        self.persist();
    }

    /// Delete a record by id. Unknown ids are ignored.
    pub fn remove_record(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.records) {
            Ok(blob) => {
                self.storage.set(RECORDS_KEY, &blob);
                debug!("persisted {} parking records", self.records.len());
            }
            Err(e) => warn!("could not serialize parking records: {e}"),
        }
    }
}
