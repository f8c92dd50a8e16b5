//! Loaded deck and where it came from.

use rcarousel::{Deck, Slide};
use std::path::{Path, PathBuf};

/// State related to the slide content on screen.
///
/// Responsibilities:
/// - Holding the current deck
/// - Tracking the source file (None for built-in or generated decks)
pub struct DeckState {
    deck: Deck,
    source: Option<PathBuf>,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckState {
    /// Starts with the built-in demo deck.
    pub fn new() -> Self {
        Self {
            deck: Deck::demo(),
            source: None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.deck.get(index)
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replaces the deck.
    ///
    /// # Arguments
    /// * `deck` - The new slides
    /// * `source` - File the deck was read from, if any
    pub fn load_deck(&mut self, deck: Deck, source: Option<PathBuf>) {
        self.deck = deck;
        self.source = source;
    }
}
