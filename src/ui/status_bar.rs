//! Status bar UI rendering
//!
//! Shows the slide position, autoplay state and where the deck came from.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_countdown, format_interval, format_position};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_position(state.carousel.current_slide(), state.carousel.slide_count())).strong());
        ui.label(RichText::new("|").strong());

        let interval = format_interval(state.carousel.config().timer_interval_ms);
        let playback = match state.carousel.time_until_advance() {
            Some(remaining) if state.carousel.is_playing() => {
                format!("Playing every {} | next in {}", interval, format_countdown(remaining))
            }
            _ => format!("Paused (every {})", interval),
        };
        ui.label(RichText::new(playback).strong());
        ui.label(RichText::new("|").strong());

        let deck = state.deck.deck();
        let source = match state.deck.source() {
            Some(path) => format!("Deck: {} ({})", deck.name, path.display()),
            None => format!("Deck: {} (built-in)", deck.name),
        };
        ui.label(RichText::new(source).strong());
    });
}
