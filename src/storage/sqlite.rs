//! SQLite-backed key-value storage (single `kv` table).

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use rusqlite::{Connection, OptionalExtension, params};

use super::KvStore;
use crate::errors::AppResult;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database at `path`, creating the file, its parent directory,
    /// and the schema as needed.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Default database location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("parktracker")
            .join("parktracker.sqlite")
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        let res = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional();
        match res {
            Ok(value) => value,
            Err(e) => {
                warn!("kv read failed for '{key}': {e}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let res = self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        );
        if let Err(e) = res {
            warn!("kv write failed for '{key}': {e}");
        }
    }
}
