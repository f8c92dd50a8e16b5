//! Slide painting.

use egui::{Align2, FontId, Painter, Rect, Stroke};
use rcarousel::{Slide, ThemeColors};
use crate::presentation::color_mapping;

const CORNER_RADIUS: f32 = 8.0;
const CAPTION_BAND_HEIGHT: f32 = 48.0;
const TITLE_FONT_SIZE: f32 = 40.0;
const CAPTION_FONT_SIZE: f32 = 18.0;

/// Paints one slide filling `rect`.
///
/// # Arguments
/// * `painter` - Painter clipped to the stage
/// * `rect` - Area the slide occupies
/// * `slide` - Slide content
/// * `theme_colors` - The color palette for the current theme
pub fn render_slide(painter: &Painter, rect: Rect, slide: &Slide, theme_colors: &ThemeColors) {
    let background = color_mapping::slide_color(slide);
    painter.rect_filled(rect, CORNER_RADIUS, background);
    painter.rect_stroke(
        rect,
        CORNER_RADIUS,
        Stroke::new(1.0, theme_colors.indicator_border),
        egui::StrokeKind::Inside,
    );

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &slide.title,
        FontId::proportional(TITLE_FONT_SIZE),
        color_mapping::text_color_on(background),
    );

    if slide.caption.is_empty() {
        return;
    }

    let band = Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - CAPTION_BAND_HEIGHT.min(rect.height())),
        rect.max,
    );
    painter.rect_filled(
        band,
        egui::CornerRadius {
            nw: 0,
            ne: 0,
            sw: CORNER_RADIUS as u8,
            se: CORNER_RADIUS as u8,
        },
        theme_colors.caption_overlay,
    );
    painter.text(
        band.center(),
        Align2::CENTER_CENTER,
        &slide.caption,
        FontId::proportional(CAPTION_FONT_SIZE),
        theme_colors.text_strong,
    );
}

/// Paints the placeholder shown when the active index has no slide content.
pub fn render_missing_slide(painter: &Painter, rect: Rect, index: usize, theme_colors: &ThemeColors) {
    painter.rect_filled(rect, CORNER_RADIUS, theme_colors.stage_background);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("Slide {} unavailable", index + 1),
        FontId::proportional(CAPTION_FONT_SIZE),
        theme_colors.text_dim,
    );
}
