//! Application-level coordination and workflow management.
//!
//! Handles deck loading, error reporting, and routing host input and frame
//! time into the carousel.

use std::path::PathBuf;
use std::time::Duration;
use rand::Rng;
use rcarousel::{Deck, InputEvent, InputOutcome};
use crate::app::AppState;
use crate::ui::input::carousel_input_handler;

/// Number of slides in a deck made with "Random Deck".
const GENERATED_DECK_SLIDES: usize = 6;

/// Frames longer than this are clamped so a stalled window (minimised,
/// debugger break) does not replay a burst of autoplay advances.
const MAX_FRAME_STEP: Duration = Duration::from_millis(500);

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a deck file and restarts the carousel on it.
    ///
    /// On failure the current deck keeps playing and the error is shown.
    pub fn open_deck(state: &mut AppState, path: PathBuf) -> bool {
        match Deck::load(&path) {
            Ok(deck) => Self::apply_deck(state, deck, Some(path)),
            Err(e) => {
                log::warn!("Could not open deck: {}", e);
                state.error_message = Some(format!("Error loading deck: {}", error_chain(&e)));
                false
            }
        }
    }

    /// Generates a random deck in memory and shows it.
    pub fn open_generated_deck(state: &mut AppState) -> bool {
        let seed: u64 = rand::thread_rng().gen();
        let deck = Deck::generate(format!("Random #{:04x}", seed & 0xffff), GENERATED_DECK_SLIDES, seed);
        log::info!("Generated deck '{}' from seed {}", deck.name, seed);
        Self::apply_deck(state, deck, None)
    }

    /// Replaces the deck and rebuilds the carousel for it.
    pub fn apply_deck(state: &mut AppState, deck: Deck, source: Option<PathBuf>) -> bool {
        match state.carousel.reset(deck.len()) {
            Ok(()) => {
                state.deck.load_deck(deck, source);
                state.error_message = None;
                true
            }
            Err(e) => {
                log::warn!("Could not show deck '{}': {}", deck.name, e);
                state.error_message = Some(format!("Error showing deck: {}", e));
                false
            }
        }
    }

    /// Feeds one frame's worth of time to the autoplay timer.
    ///
    /// Returns the number of autoplay advances.
    pub fn advance_autoplay(state: &mut AppState, frame_time: Duration) -> usize {
        let advanced = state.carousel.advance(frame_time.min(MAX_FRAME_STEP));
        if advanced > 0 {
            log::trace!("Autoplay advanced to slide {}", state.carousel.current_slide());
        }
        advanced
    }

    /// Routes a carousel event from a panel.
    pub fn handle_carousel_input(state: &mut AppState, event: InputEvent) -> InputOutcome {
        let outcome = state.carousel.handle(event);
        if !outcome.handled {
            log::trace!("Carousel ignored {:?}", event);
        }
        outcome
    }

    /// Dispatches this frame's key presses and swallows those the carousel
    /// claims exclusively, before any widget sees them.
    pub fn handle_keyboard(state: &mut AppState, ctx: &egui::Context) {
        for press in carousel_input_handler::pressed_carousel_keys(ctx) {
            let outcome = Self::handle_carousel_input(state, InputEvent::KeyDown(press.key));
            if outcome.prevent_default {
                ctx.input_mut(|i| i.consume_key(press.modifiers, press.egui_key));
            }
        }
    }
}

/// Joins an error with its sources: "outer: inner".
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcarousel::{CarouselConfig, Slide};

    fn app_state() -> AppState {
        AppState::with_theme(CarouselConfig::default(), "Dark".to_string()).unwrap()
    }

    #[test]
    fn test_apply_deck_restarts_carousel() {
        let mut state = app_state();
        ApplicationCoordinator::handle_carousel_input(&mut state, InputEvent::NextClicked);

        let deck = Deck::generate("two", 2, 3);
        assert!(ApplicationCoordinator::apply_deck(&mut state, deck, None));
        assert_eq!(state.carousel.slide_count(), 2);
        assert_eq!(state.carousel.current_slide(), 0);
        assert_eq!(state.deck.deck().name, "two");
    }

    #[test]
    fn test_empty_deck_keeps_previous_one() {
        let mut state = app_state();
        let deck = Deck { name: "empty".to_string(), slides: Vec::<Slide>::new() };

        assert!(!ApplicationCoordinator::apply_deck(&mut state, deck, None));
        assert_eq!(state.deck.deck().name, "Demo");
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_open_missing_deck_reports_error() {
        let mut state = app_state();
        assert!(!ApplicationCoordinator::open_deck(&mut state, PathBuf::from("/no/such/deck.json")));
        let message = state.error_message.unwrap();
        assert!(message.contains("deck.json"));
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut state = app_state();
        assert_eq!(ApplicationCoordinator::advance_autoplay(&mut state, Duration::from_secs(60)), 0);
        for _ in 0..3 {
            ApplicationCoordinator::advance_autoplay(&mut state, Duration::from_millis(500));
        }
        assert_eq!(state.carousel.current_slide(), 1);
    }

    fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_modified_space_is_consumed() {
        let mut state = app_state();
        let ctx = egui::Context::default();

        let _ = ctx.run(key_press(egui::Key::Space, egui::Modifiers::SHIFT), |ctx| {
            ApplicationCoordinator::handle_keyboard(&mut state, ctx);
            let space_left = ctx.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::Key { .. })));
            assert!(!space_left);
        });
        assert!(!state.carousel.is_playing());
    }

    #[test]
    fn test_arrow_keys_are_left_for_widgets() {
        let mut state = app_state();
        let ctx = egui::Context::default();

        let _ = ctx.run(key_press(egui::Key::ArrowRight, egui::Modifiers::NONE), |ctx| {
            ApplicationCoordinator::handle_keyboard(&mut state, ctx);
            assert!(ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)));
        });
        assert_eq!(state.carousel.current_slide(), 1);
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Deck::load(std::path::Path::new("/no/such/deck.json")).unwrap_err();
        let message = error_chain(&err);
        assert!(message.starts_with("failed to access"));
        assert!(message.matches(": ").count() >= 1);
    }
}
