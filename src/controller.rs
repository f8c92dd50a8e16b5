//! The carousel state machine.
//!
//! A controller owns the index of the active slide, a two-state playback
//! machine (`Playing` carries the live timer handle, `Paused` carries none) and
//! the start of an in-progress swipe. All transitions run to completion on
//! the caller's thread.

use crate::config::{CarouselConfig, ManualNavigation};
use crate::error::{CarouselError, Result};
use crate::input::{Command, InputEvent, InputMap, InputOutcome};
use crate::traits::{PlayGlyph, Scheduler, SlideView, TimerHandle};

/// Autoplay state. The timer handle only exists while playing, so the
/// "playing" flag and the live timer can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing(TimerHandle),
    Paused,
}

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right: reveal the previous slide
    TowardPrev,
    /// Finger moved left: reveal the next slide
    TowardNext,
}

/// Classifies a horizontal gesture. Travel must strictly exceed the threshold.
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<Swipe> {
    let diff = end_x - start_x;
    if diff > threshold {
        Some(Swipe::TowardPrev)
    } else if diff < -threshold {
        Some(Swipe::TowardNext)
    } else {
        None
    }
}

/// Maps any integer onto `[0, count)`, wrapping in both directions.
pub fn normalize_index(target: i64, count: usize) -> usize {
    target.rem_euclid(count as i64) as usize
}

pub struct CarouselController<V: SlideView, S: Scheduler> {
    view: V,
    scheduler: S,
    config: CarouselConfig,
    input_map: InputMap,
    slide_count: usize,
    current_slide: usize,
    playback: Playback,
    swipe_start_x: Option<f32>,
}

impl<V: SlideView, S: Scheduler> CarouselController<V, S> {
    /// Attaches a controller to `slide_count` slides.
    ///
    /// Slide 0 becomes active and, when `config.autoplay` is set, the first
    /// autoplay cycle is armed.
    ///
    /// # Errors
    /// `EmptySlides` when `slide_count` is zero, or the config's validation error.
    pub fn new(view: V, scheduler: S, slide_count: usize, config: CarouselConfig) -> Result<Self> {
        if slide_count == 0 {
            return Err(CarouselError::EmptySlides);
        }
        config.validate()?;

        let mut controller = Self {
            view,
            scheduler,
            input_map: config.input_map(),
            config,
            slide_count,
            current_slide: 0,
            playback: Playback::Paused,
            swipe_start_x: None,
        };

        controller.sync_view();
        if controller.config.autoplay {
            controller.resume();
        }
        log::debug!(
            "Carousel attached to {} slides (autoplay: {})",
            slide_count,
            controller.is_playing()
        );
        Ok(controller)
    }

    // ===== Queries =====

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing(_))
    }

    /// Handle of the live autoplay timer, if playing.
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        match self.playback {
            Playback::Playing(handle) => Some(handle),
            Playback::Paused => None,
        }
    }

    pub fn swipe_start_x(&self) -> Option<f32> {
        self.swipe_start_x
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn input_map(&self) -> &InputMap {
        &self.input_map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ===== Navigation =====

    /// Activates the slide at `target`, wrapping it into range first.
    ///
    /// Returns the index that became active.
    pub fn goto(&mut self, target: i64) -> usize {
        let normalized = normalize_index(target, self.slide_count);

        self.view.set_slide_active(self.current_slide, false);
        self.view.set_indicator_active(self.current_slide, false);

        self.current_slide = normalized;
        self.view.set_slide_active(normalized, true);
        self.view.set_indicator_active(normalized, true);

        log::trace!("Slide {} of {} active", normalized, self.slide_count);
        normalized
    }

    pub fn next(&mut self) -> usize {
        self.goto(self.current_slide as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.goto(self.current_slide as i64 - 1)
    }

    // ===== Playback =====

    /// Stops autoplay. Returns false if it was already stopped.
    pub fn pause(&mut self) -> bool {
        let Playback::Playing(handle) = self.playback else {
            return false;
        };
        self.scheduler.cancel(handle);
        self.playback = Playback::Paused;
        self.view.set_play_glyph(PlayGlyph::Play);
        log::debug!("Autoplay paused");
        true
    }

    /// Starts a fresh autoplay cycle. Returns false if one was already running.
    pub fn resume(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        let handle = self.scheduler.arm_repeating(self.config.timer_interval_ms);
        self.playback = Playback::Playing(handle);
        self.view.set_play_glyph(PlayGlyph::Pause);
        log::debug!("Autoplay resumed every {} ms", self.config.timer_interval_ms);
        true
    }

    /// Pauses when playing, resumes when paused.
    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Handles a timer firing. Only the live handle advances the carousel;
    /// firings of cancelled timers are dropped.
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if self.timer_handle() != Some(handle) {
            log::trace!("Ignoring stale timer {}", handle.raw());
            return false;
        }
        self.next();
        true
    }

    // ===== Commands and input =====

    /// Runs a command. Navigation commands go through the manual-navigation
    /// path, which restarts the autoplay phase according to the config.
    pub fn execute(&mut self, command: Command) {
        let current = self.current_slide as i64;
        match command {
            Command::Next => self.navigate_manually(current + 1),
            Command::Prev => self.navigate_manually(current - 1),
            Command::Goto(target) => self.navigate_manually(target),
            Command::TogglePlay => self.toggle_play(),
            Command::Pause => {
                self.pause();
            }
            Command::Resume => {
                self.resume();
            }
        }
    }

    fn navigate_manually(&mut self, target: i64) {
        let was_playing = self.pause();
        self.goto(target);

        match self.config.manual_navigation {
            ManualNavigation::Restart => {
                self.resume();
            }
            ManualNavigation::KeepState if was_playing => {
                self.resume();
            }
            ManualNavigation::KeepState | ManualNavigation::Stop => {}
        }
    }

    /// Records where a pointer or touch gesture started.
    pub fn begin_swipe(&mut self, x: f32) {
        self.swipe_start_x = Some(x);
    }

    /// Finishes a gesture and navigates if it travelled past the threshold.
    ///
    /// A release without a recorded start is ignored.
    pub fn end_swipe(&mut self, x: f32) -> Option<Swipe> {
        let start_x = self.swipe_start_x.take()?;
        let swipe = classify_swipe(start_x, x, self.config.swipe_threshold_px)?;

        log::debug!("Swipe {:?} ({} -> {})", swipe, start_x, x);
        match swipe {
            Swipe::TowardPrev => self.execute(Command::Prev),
            Swipe::TowardNext => self.execute(Command::Next),
        }
        Some(swipe)
    }

    /// Dispatches one host event.
    pub fn handle(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::NextClicked => {
                self.execute(Command::Next);
                InputOutcome::handled()
            }
            InputEvent::PrevClicked => {
                self.execute(Command::Prev);
                InputOutcome::handled()
            }
            InputEvent::IndicatorClicked(index) if index < self.slide_count => {
                self.execute(Command::Goto(index as i64));
                InputOutcome::handled()
            }
            InputEvent::IndicatorClicked(index) => {
                log::trace!("Ignoring click on missing indicator {}", index);
                InputOutcome::ignored()
            }
            InputEvent::PlayPauseClicked => {
                self.execute(Command::TogglePlay);
                InputOutcome::handled()
            }
            InputEvent::KeyDown(key) => match self.input_map.binding_for(key).copied() {
                Some(binding) => {
                    self.execute(binding.command);
                    if binding.prevent_default {
                        InputOutcome::handled_exclusively()
                    } else {
                        InputOutcome::handled()
                    }
                }
                None => InputOutcome::ignored(),
            },
            InputEvent::PointerDown { x } => {
                self.begin_swipe(x);
                InputOutcome::handled()
            }
            InputEvent::PointerUp { x } => match self.end_swipe(x) {
                Some(_) => InputOutcome::handled(),
                None => InputOutcome::ignored(),
            },
            InputEvent::TimerFired(handle) => {
                if self.tick(handle) {
                    InputOutcome::handled()
                } else {
                    InputOutcome::ignored()
                }
            }
        }
    }

    /// Stops autoplay and hands back the view and scheduler.
    pub fn detach(mut self) -> (V, S) {
        self.pause();
        (self.view, self.scheduler)
    }

    /// Writes the full marker state so exactly one slide and its indicator are active.
    fn sync_view(&mut self) {
        for i in 0..self.slide_count {
            let active = i == self.current_slide;
            self.view.set_slide_active(i, active);
            self.view.set_indicator_active(i, active);
        }
        let glyph = if self.is_playing() { PlayGlyph::Pause } else { PlayGlyph::Play };
        self.view.set_play_glyph(glyph);
    }
}
