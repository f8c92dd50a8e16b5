//! In-memory [`SlideView`] that records the active markers.
//!
//! Immediate-mode hosts read it back each frame to decide what to paint.

use crate::traits::{PlayGlyph, SlideView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerView {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    glyph: PlayGlyph,
}

impl MarkerView {
    /// Creates a view for `count` slides with the first slide and indicator active.
    pub fn new(count: usize) -> Self {
        let mut slides = vec![false; count];
        let mut indicators = vec![false; count];
        if count > 0 {
            slides[0] = true;
            indicators[0] = true;
        }
        Self { slides, indicators, glyph: PlayGlyph::Pause }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slides.get(index).copied().unwrap_or(false)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn active_slides(&self) -> Vec<usize> {
        Self::active_positions(&self.slides)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        Self::active_positions(&self.indicators)
    }

    pub fn glyph(&self) -> PlayGlyph {
        self.glyph
    }

    fn active_positions(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }
}

impl SlideView for MarkerView {
    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.slides.get_mut(index) {
            *flag = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }

    fn set_play_glyph(&mut self, glyph: PlayGlyph) {
        self.glyph = glyph;
    }
}
