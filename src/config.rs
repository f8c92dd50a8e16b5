//! Carousel configuration.
//!
//! Stored as JSON. Every field has a default, so a partial file (or `{}`)
//! is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{CarouselError, Result};
use crate::input::{default_key_bindings, InputMap, KeyBinding};

pub const DEFAULT_TIMER_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 100.0;

const CONFIG_DIR_NAME: &str = "rcarousel";
const CONFIG_FILE_NAME: &str = "config.json";

/// What happens to autoplay after the user navigates by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManualNavigation {
    /// Always re-arm a fresh autoplay cycle
    #[default]
    Restart,
    /// Re-arm only if autoplay was running before the navigation
    KeepState,
    /// Leave autoplay stopped until explicitly resumed
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds
    pub timer_interval_ms: u64,
    /// Minimum horizontal travel, in pixels, for a gesture to count as a swipe
    pub swipe_threshold_px: f32,
    /// Start playing as soon as the carousel is built
    pub autoplay: bool,
    pub manual_navigation: ManualNavigation,
    pub key_bindings: Vec<KeyBinding>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            timer_interval_ms: DEFAULT_TIMER_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            autoplay: true,
            manual_navigation: ManualNavigation::default(),
            key_bindings: default_key_bindings(),
        }
    }
}

impl CarouselConfig {
    /// Checks the values a controller cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.timer_interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(CarouselError::InvalidSwipeThreshold(self.swipe_threshold_px));
        }
        Ok(())
    }

    pub fn input_map(&self) -> InputMap {
        InputMap::new(self.key_bindings.clone())
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| CarouselError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json, path)?;
        log::info!("Loaded carousel config from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration from the user config directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_default_location() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| CarouselError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<config_dir>/rcarousel/config.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Command, Key};

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.timer_interval_ms, 2000);
        assert_eq!(config.swipe_threshold_px, 100.0);
        assert!(config.autoplay);
        assert_eq!(config.manual_navigation, ManualNavigation::Restart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CarouselConfig::from_json(r#"{"timer_interval_ms": 500}"#, Path::new("inline")).unwrap();
        assert_eq!(config.timer_interval_ms, 500);
        assert_eq!(config.swipe_threshold_px, DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(config.key_bindings, default_key_bindings());
    }

    #[test]
    fn test_manual_navigation_from_json() {
        let config = CarouselConfig::from_json(r#"{"manual_navigation": "Stop"}"#, Path::new("inline")).unwrap();
        assert_eq!(config.manual_navigation, ManualNavigation::Stop);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = CarouselConfig::from_json(r#"{"timer_interval_ms": 0}"#, Path::new("inline"));
        assert!(matches!(result, Err(CarouselError::ZeroInterval)));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let config = CarouselConfig { swipe_threshold_px: -1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(CarouselError::InvalidSwipeThreshold(_))));

        let config = CarouselConfig { swipe_threshold_px: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_reports_origin() {
        let err = CarouselConfig::from_json("{", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_custom_bindings_feed_input_map() {
        let config = CarouselConfig {
            key_bindings: vec![KeyBinding::new(Key::End, Command::Goto(-1))],
            ..Default::default()
        };
        let map = config.input_map();
        assert_eq!(map.binding_for(Key::End).map(|b| b.command), Some(Command::Goto(-1)));
        assert!(map.binding_for(Key::Space).is_none());
    }
}
