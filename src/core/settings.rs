//! Persisted settings holder.

use log::warn;

use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::storage::{KvStore, SETTINGS_KEY};

pub struct SettingsHolder {
    settings: Settings,
    storage: Box<dyn KvStore>,
}

impl SettingsHolder {
    /// Load settings from storage, or defaults when the key is missing or
    /// the blob does not parse.
    pub fn new(storage: Box<dyn KvStore>) -> Self {
        let settings = match storage.get(SETTINGS_KEY) {
            None => Settings::default(),
            Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                warn!("could not parse stored settings, using defaults: {e}");
                Settings::default()
            }),
        };
        Self { settings, storage }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn max_parking_hours(&self) -> u32 {
        self.settings.max_parking_hours
    }

    /// Update the grace period. Values outside `[1, 8760]` are rejected and
    /// the previous value stays in effect.
    pub fn set_max_parking_hours(&mut self, hours: i64) -> AppResult<()> {
        if !Settings::in_range(hours) {
            return Err(AppError::InvalidMaxHours(hours));
        }
        self.settings.max_parking_hours = hours as u32;
        self.persist();
        Ok(())
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(blob) => self.storage.set(SETTINGS_KEY, &blob),
            Err(e) => warn!("could not serialize settings: {e}"),
        }
    }
}
