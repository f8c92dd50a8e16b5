//! Colour mapping for slides and indicators.
//!
//! The active indicator is filled with its slide's background so the
//! indicator row previews what is on screen; idle indicators use the theme.

use egui::Color32;
use rcarousel::{Slide, ThemeColors};

/// Background colour of a slide.
pub fn slide_color(slide: &Slide) -> Color32 {
    let [r, g, b] = slide.color;
    Color32::from_rgb(r, g, b)
}

/// Fill colour of an indicator.
///
/// # Arguments
/// * `active` - Whether the indicator is the active one
/// * `slide` - The slide the indicator points at, if known
/// * `colors` - The current theme's palette
pub fn indicator_color(active: bool, slide: Option<&Slide>, colors: &ThemeColors) -> Color32 {
    match (active, slide) {
        (true, Some(slide)) => slide_color(slide),
        (true, None) => colors.accent,
        (false, _) => colors.indicator_idle,
    }
}

/// Picks black or white text, whichever reads better on `background`.
pub fn text_color_on(background: Color32) -> Color32 {
    // Rec. 601 luma
    let luma = 0.299 * background.r() as f32 + 0.587 * background.g() as f32 + 0.114 * background.b() as f32;
    if luma > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
