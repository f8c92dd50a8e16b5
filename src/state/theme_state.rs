//! Theme selection state.

use once_cell::sync::Lazy;
use rcarousel::{ThemeColors, ThemeManager};

pub const DEFAULT_THEME: &str = "Dark";

static FALLBACK_COLORS: Lazy<ThemeColors> = Lazy::new(ThemeColors::default);

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a theme state for a stored theme name. Unknown names fall back
    /// to the default theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            log::warn!("Unknown theme '{}', using {}", theme_name, DEFAULT_THEME);
            DEFAULT_THEME.to_string()
        };
        Self { theme_manager, current_theme_name }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Colours of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        self.theme_manager
            .get_theme(&self.current_theme_name)
            .or_else(|| self.theme_manager.get_theme(DEFAULT_THEME))
            .map_or(&*FALLBACK_COLORS, |t| &t.colors)
    }

    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}
