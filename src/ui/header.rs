//! Header panel UI rendering
//!
//! Deck controls on the left, theme selector on the right.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a deck file
    OpenDeckRequested(PathBuf),
    /// User asked for a random deck
    GenerateDeckRequested,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (theme selection)
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Deck").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Carousel Decks", &["json"]);

            if let Some(dir) = state.deck.source().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            } else if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenDeckRequested(path));
            }
        }

        if ui.button("🎲 Random Deck").clicked() {
            interaction = Some(HeaderInteraction::GenerateDeckRequested);
        }

        ui.separator();
        ui.label(egui::RichText::new(&state.deck.deck().name).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                log::debug!("Theme changed to {}", current_theme);
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    interaction
}
