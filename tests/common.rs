#![allow(dead_code)]
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use parktracker::notify::{Notifier, Severity};
use parktracker::utils::clock::Clock;
use parktracker::{MemoryStore, ParkingStatus, ParkingTracker};

/// Clock pinned to a settable instant, so status derivation is
/// deterministic in tests.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Tracker over fresh in-memory storage with a pinned clock.
pub fn tracker_at(now: DateTime<Utc>) -> (ParkingTracker, Arc<FixedClock>) {
    let clock = FixedClock::at(now);
    let tracker = ParkingTracker::new(
        Box::new(MemoryStore::new()),
        Box::new(MemoryStore::new()),
        clock.clone(),
    );
    (tracker, clock)
}

/// Notifier spy recording every emission. Clones share the call log.
#[derive(Default, Clone)]
pub struct SpyNotifier {
    calls: Arc<Mutex<Vec<Severity>>>,
}

impl SpyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Severity> {
        self.calls.lock().unwrap().clone()
    }
}

impl Notifier for SpyNotifier {
    fn notify(&self, severity: Severity, _status: &ParkingStatus) {
        self.calls.lock().unwrap().push(severity);
    }
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_parktracker.sqlite"));
    std::fs::remove_file(&path).ok();
    path
}
