//! Settings persistence coordination.
//!
//! Values are stored in eframe's key-value storage as JSON strings, so any
//! serde type can be persisted under a string key.

use serde::{Deserialize, Serialize};

/// Storage key for the path of the last deck opened from disk.
pub const LAST_DECK_KEY: &str = "last_deck_path";

/// Coordinates typed settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning `default` when it is missing or unreadable.
    ///
    /// # Examples
    /// ```ignore
    /// let last_deck: Option<PathBuf> =
    ///     SettingsCoordinator::load_setting_or(storage, LAST_DECK_KEY, None);
    /// ```
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, returning None when it is missing or unreadable.
    ///
    /// A stored value that no longer parses (e.g. after a format change) is
    /// logged and treated as missing.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unreadable setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting and flushes storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("Failed to serialize setting '{}': {}", key, e),
        }
    }
}
