//! Carousel controls rendering
//!
//! Previous / play-pause / next buttons followed by one indicator per slide.
//! The active indicator is tinted with its slide's colour.

use eframe::egui;
use rcarousel::{InputEvent, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping;

const INDICATOR_RADIUS: f32 = 7.0;
const INDICATOR_SPACING: f32 = 6.0;

/// Renders the controls bar.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// Carousel events from button and indicator clicks
pub fn render_controls_bar(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> Vec<InputEvent> {
    let mut events = Vec::new();

    ui.horizontal_centered(|ui| {
        if ui.button("⏮ Prev").clicked() {
            events.push(InputEvent::PrevClicked);
        }

        let glyph = state.carousel.glyph();
        if ui.button(format!("{} {}", glyph.icon(), glyph.label())).clicked() {
            events.push(InputEvent::PlayPauseClicked);
        }

        if ui.button("Next ⏭").clicked() {
            events.push(InputEvent::NextClicked);
        }

        ui.separator();

        ui.spacing_mut().item_spacing.x = INDICATOR_SPACING;
        for index in 0..state.carousel.slide_count() {
            if render_indicator(ui, state, index, theme_colors) {
                events.push(InputEvent::IndicatorClicked(index));
            }
        }
    });

    events
}

/// Draws one indicator dot and returns true when it was clicked.
fn render_indicator(ui: &mut egui::Ui, state: &AppState, index: usize, theme_colors: &ThemeColors) -> bool {
    let size = egui::vec2(INDICATOR_RADIUS * 2.0, INDICATOR_RADIUS * 2.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    let slide = state.deck.slide(index);
    let active = state.carousel.is_indicator_active(index);
    let fill = color_mapping::indicator_color(active, slide, theme_colors);
    let radius = if response.hovered() { INDICATOR_RADIUS } else { INDICATOR_RADIUS - 1.0 };

    ui.painter().circle_filled(rect.center(), radius, fill);
    ui.painter().circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(if active { 2.0 } else { 1.0 }, theme_colors.indicator_border),
    );

    let hover_text = match slide {
        Some(slide) => format!("{}: {}", index + 1, slide.title),
        None => format!("Slide {}", index + 1),
    };
    response.on_hover_text(hover_text).clicked()
}
