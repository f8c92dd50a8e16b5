//! Carousel playback state.
//!
//! Wraps the library controller with the in-memory marker view and the
//! virtual scheduler, which the GUI advances from frame time.

use std::time::Duration;
use rcarousel::{
    CarouselConfig, CarouselController, CarouselError, InputEvent, InputOutcome,
    MarkerView, PlayGlyph, VirtualScheduler,
};

type Controller = CarouselController<MarkerView, VirtualScheduler>;

/// State of the running carousel.
///
/// Responsibilities:
/// - Owning the controller for the current deck
/// - Feeding elapsed frame time to the autoplay timer
/// - Rebuilding the controller when the deck changes
pub struct CarouselState {
    controller: Controller,
    config: CarouselConfig,
}

impl CarouselState {
    /// Creates a carousel for `slide_count` slides.
    pub fn new(slide_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        let controller = Self::build(slide_count, &config)?;
        Ok(Self { controller, config })
    }

    /// Rebuilds the carousel for a new slide count, starting from slide 0.
    ///
    /// The previous autoplay timer is cancelled first. On error the current
    /// carousel keeps running.
    pub fn reset(&mut self, slide_count: usize) -> Result<(), CarouselError> {
        let controller = Self::build(slide_count, &self.config)?;
        let old = std::mem::replace(&mut self.controller, controller);
        old.detach();
        Ok(())
    }

    fn build(slide_count: usize, config: &CarouselConfig) -> Result<Controller, CarouselError> {
        CarouselController::new(
            MarkerView::new(slide_count),
            VirtualScheduler::new(),
            slide_count,
            config.clone(),
        )
    }

    // ===== Queries =====

    pub fn current_slide(&self) -> usize {
        self.controller.current_slide()
    }

    pub fn slide_count(&self) -> usize {
        self.controller.slide_count()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn glyph(&self) -> PlayGlyph {
        self.controller.view().glyph()
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.controller.view().is_slide_active(index)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.controller.view().is_indicator_active(index)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Time until the next autoplay advance, if playing.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.controller.scheduler().time_until_next()
    }

    // ===== Mutations =====

    /// Dispatches an input event to the controller.
    pub fn handle(&mut self, event: InputEvent) -> InputOutcome {
        self.controller.handle(event)
    }

    /// Advances the virtual clock and delivers every timer firing.
    ///
    /// Returns the number of firings that moved the carousel.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let fired = self.controller.scheduler_mut().advance(elapsed);
        fired
            .into_iter()
            .filter(|&handle| self.controller.handle(InputEvent::TimerFired(handle)).handled)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_once_per_interval() {
        let mut state = CarouselState::new(3, CarouselConfig::default()).unwrap();
        assert_eq!(state.advance(Duration::from_millis(1999)), 0);
        assert_eq!(state.advance(Duration::from_millis(1)), 1);
        assert_eq!(state.current_slide(), 1);
        assert_eq!(state.advance(Duration::from_millis(4000)), 2);
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut state = CarouselState::new(3, CarouselConfig::default()).unwrap();
        state.handle(InputEvent::NextClicked);
        state.reset(5).unwrap();

        assert_eq!(state.slide_count(), 5);
        assert_eq!(state.current_slide(), 0);
        assert!(state.is_playing());
        assert_eq!(state.time_until_advance(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_failed_reset_keeps_current_carousel() {
        let mut state = CarouselState::new(3, CarouselConfig::default()).unwrap();
        state.handle(InputEvent::NextClicked);

        assert!(state.reset(0).is_err());
        assert_eq!(state.slide_count(), 3);
        assert_eq!(state.current_slide(), 1);
    }

    #[test]
    fn test_paused_carousel_does_not_advance() {
        let mut state = CarouselState::new(3, CarouselConfig::default()).unwrap();
        state.handle(InputEvent::PlayPauseClicked);
        assert_eq!(state.glyph(), PlayGlyph::Play);
        assert_eq!(state.advance(Duration::from_secs(60)), 0);
        assert_eq!(state.time_until_advance(), None);
    }
}
