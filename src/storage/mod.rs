//! Key-value persistence port and its backends.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage key for the serialized record collection.
pub const RECORDS_KEY: &str = "bike_parking_records";
/// Storage key for the serialized settings blob.
pub const SETTINGS_KEY: &str = "bike_parking_settings";

/// Keyed blob storage. `get` returns `None` for missing keys and never
/// fails; `set` is fire-and-forget from the caller's perspective (backends
/// log and swallow write errors, and re-writing identical state is harmless).
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}
