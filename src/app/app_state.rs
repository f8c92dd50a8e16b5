//! Centralized application state for the carousel GUI.
//!
//! Composed of focused state components so each keeps its own invariants
//! and the borrow checker can hand out disjoint borrows.

use rcarousel::{CarouselConfig, CarouselError};
use crate::state::{CarouselState, DeckState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Running carousel (controller and autoplay clock)
    pub carousel: CarouselState,

    /// Slides on screen
    pub deck: DeckState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the state with the built-in demo deck and a theme loaded from storage.
    pub fn with_theme(config: CarouselConfig, theme_name: String) -> Result<Self, CarouselError> {
        let deck = DeckState::new();
        let carousel = CarouselState::new(deck.len(), config)?;

        Ok(Self {
            carousel,
            deck,
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        })
    }
}
