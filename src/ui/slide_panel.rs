//! Slide stage rendering
//!
//! Paints the active slide, overlays previous/next arrows on its edges and
//! turns drags across it into swipe events.

use eframe::egui;
use rcarousel::{InputEvent, ThemeColors};
use crate::app::AppState;
use crate::rendering::slide_renderer;
use crate::ui::input::carousel_input_handler;

const ARROW_SIZE: egui::Vec2 = egui::vec2(36.0, 56.0);
const ARROW_MARGIN: f32 = 12.0;

/// Renders the slide stage.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// Carousel events produced by the stage (arrow clicks and swipes)
pub fn render_slide_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) -> Vec<InputEvent> {
    let (stage_rect, stage_response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let painter = ui.painter_at(stage_rect);

    // Paint whichever slide the view marks active
    let active = (0..state.carousel.slide_count()).find(|&i| state.carousel.is_slide_active(i));
    if let Some(index) = active {
        match state.deck.slide(index) {
            Some(slide) => slide_renderer::render_slide(&painter, stage_rect, slide, theme_colors),
            None => slide_renderer::render_missing_slide(&painter, stage_rect, index, theme_colors),
        }
    }

    let mut events = carousel_input_handler::swipe_events(ui.ctx(), &stage_response);

    let prev_rect = egui::Rect::from_center_size(
        egui::pos2(stage_rect.left() + ARROW_MARGIN + ARROW_SIZE.x / 2.0, stage_rect.center().y),
        ARROW_SIZE,
    );
    let next_rect = egui::Rect::from_center_size(
        egui::pos2(stage_rect.right() - ARROW_MARGIN - ARROW_SIZE.x / 2.0, stage_rect.center().y),
        ARROW_SIZE,
    );

    if ui.put(prev_rect, egui::Button::new("◀")).on_hover_text("Previous slide").clicked() {
        events.push(InputEvent::PrevClicked);
    }
    if ui.put(next_rect, egui::Button::new("▶")).on_hover_text("Next slide").clicked() {
        events.push(InputEvent::NextClicked);
    }

    events
}
