//! Theme management and persistence coordination.

use crate::app::AppState;
use crate::state::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference saved by a previous session.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme switch takes effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        if let Some(theme) = manager.get_theme(state.theme.current_theme_name()) {
            ctx.set_visuals(manager.visuals_for(theme));
        }
    }
}
