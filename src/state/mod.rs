//! State management modules for the carousel GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Carousel state (controller, autoplay clock)
//! - Deck state (slides on screen, source file)
//! - Theme state (theme manager, current theme)

mod carousel_state;
mod deck_state;
mod theme_state;

pub use carousel_state::CarouselState;
pub use deck_state::DeckState;
pub use theme_state::{ThemeState, DEFAULT_THEME};
