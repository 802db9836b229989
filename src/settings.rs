//! Application settings.
//!
//! Settings live in one explicit struct, loaded once at startup and saved
//! whenever a value changes. Persistence goes through the `SettingsStore`
//! port so the app never touches storage directly.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const SIGNAL_THRESHOLD_MIN: i32 = -100;
pub const SIGNAL_THRESHOLD_MAX: i32 = -50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Auto-scan interval in seconds; 0 disables auto-scan
    pub scan_interval_secs: u64,
    /// Networks weaker than this are dimmed and can trip the weak-signal
    /// trigger. Kept within [-100, -50] dBm.
    pub signal_threshold_dbm: i32,
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_interval_secs: 0,
            signal_threshold_dbm: -85,
            theme: ThemeMode::Dark,
        }
    }
}

impl Settings {
    pub fn set_signal_threshold(&mut self, dbm: i32) {
        self.signal_threshold_dbm = dbm.clamp(SIGNAL_THRESHOLD_MIN, SIGNAL_THRESHOLD_MAX);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}

/// Persistence port for settings. Injected into the app so storage can be
/// swapped out (or stubbed) without touching the callers.
pub trait SettingsStore {
    /// Load previously saved settings, or None if nothing was saved yet
    fn load(&self) -> Result<Option<Settings>>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings stored as a JSON file next to the database.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scan_interval_secs, 0);
        assert_eq!(settings.signal_threshold_dbm, -85);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_threshold_clamped() {
        let mut settings = Settings::default();
        settings.set_signal_threshold(-120);
        assert_eq!(settings.signal_threshold_dbm, -100);
        settings.set_signal_threshold(-30);
        assert_eq!(settings.signal_threshold_dbm, -50);
        settings.set_signal_threshold(-72);
        assert_eq!(settings.signal_threshold_dbm, -72);
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));

        let mut settings = Settings::default();
        settings.scan_interval_secs = 3600;
        settings.set_signal_threshold(-70);
        settings.toggle_theme();

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("settings.json"));
        store.save(&Settings::default()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
