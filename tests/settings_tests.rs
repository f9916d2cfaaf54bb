mod common;

use parktracker::storage::SETTINGS_KEY;
use parktracker::{DEFAULT_MAX_HOURS, KvStore, MemoryStore, SettingsHolder};

#[test]
fn missing_blob_yields_default() {
    let holder = SettingsHolder::new(Box::new(MemoryStore::new()));
    assert_eq!(holder.max_parking_hours(), DEFAULT_MAX_HOURS);
    assert_eq!(DEFAULT_MAX_HOURS, 168);
}

#[test]
fn corrupt_blob_yields_default() {
    let mut mem = MemoryStore::new();
    mem.set(SETTINGS_KEY, "»garbage«");

    let holder = SettingsHolder::new(Box::new(mem));
    assert_eq!(holder.max_parking_hours(), DEFAULT_MAX_HOURS);
}

#[test]
fn update_persists_with_blob_field_name() {
    let mem = MemoryStore::new();
    let mut holder = SettingsHolder::new(Box::new(mem.clone()));

    holder.set_max_parking_hours(24).unwrap();
    assert_eq!(holder.max_parking_hours(), 24);

    let blob = mem.get(SETTINGS_KEY).expect("settings blob written");
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed["maxParkingHours"], 24);

    // And a fresh holder reads it back.
    let reloaded = SettingsHolder::new(Box::new(mem));
    assert_eq!(reloaded.max_parking_hours(), 24);
}

#[test]
fn out_of_range_values_are_rejected_and_prior_kept() {
    let mut holder = SettingsHolder::new(Box::new(MemoryStore::new()));
    holder.set_max_parking_hours(48).unwrap();

    for bad in [0, -3, 8761, i64::MAX] {
        assert!(holder.set_max_parking_hours(bad).is_err());
        assert_eq!(holder.max_parking_hours(), 48);
    }
}

#[test]
fn range_bounds_are_inclusive() {
    let mut holder = SettingsHolder::new(Box::new(MemoryStore::new()));

    holder.set_max_parking_hours(1).unwrap();
    assert_eq!(holder.max_parking_hours(), 1);

    holder.set_max_parking_hours(8760).unwrap();
    assert_eq!(holder.max_parking_hours(), 8760);
}
