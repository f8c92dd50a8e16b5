//! Slide content.
//!
//! A deck is a named list of slides stored as JSON:
//!
//! ```json
//! {
//!   "name": "Travel",
//!   "slides": [
//!     { "title": "Coast", "caption": "Morning fog", "color": [52, 101, 164] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    /// Background colour as RGB
    pub color: [u8; 3],
}

impl Slide {
    pub fn new(title: impl Into<String>, caption: impl Into<String>, color: [u8; 3]) -> Self {
        Self { title: title.into(), caption: caption.into(), color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub slides: Vec<Slide>,
}

static DEMO_DECK: Lazy<Deck> = Lazy::new(|| Deck {
    name: "Demo".to_string(),
    slides: vec![
        Slide::new("Harbour", "Boats waiting for the tide", [52, 101, 164]),
        Slide::new("Orchard", "Late summer, first apples", [78, 154, 6]),
        Slide::new("Canyon", "Red rock after the rain", [204, 0, 0]),
        Slide::new("Dunes", "Wind-carved ridges at noon", [196, 160, 0]),
        Slide::new("Aurora", "Quiet lights over the fjord", [117, 80, 123]),
    ],
});

const TITLE_WORDS: &[&str] = &[
    "Harbour", "Orchard", "Canyon", "Dunes", "Aurora", "Glacier", "Meadow",
    "Lagoon", "Summit", "Delta", "Forest", "Reef", "Tundra", "Valley",
];

const CAPTION_WORDS: &[&str] = &[
    "morning", "quiet", "storm", "light", "tide", "river", "stone",
    "winter", "bloom", "haze", "ember", "shadow", "drift", "echo",
];

impl Deck {
    /// Built-in deck shown when nothing else is loaded.
    pub fn demo() -> Deck {
        DEMO_DECK.clone()
    }

    /// Generates a deck of `count` slides. The same seed always yields the same deck.
    pub fn generate(name: impl Into<String>, count: usize, seed: u64) -> Deck {
        let mut rng = StdRng::seed_from_u64(seed);
        let slides = (0..count)
            .map(|i| {
                let title = format!("{} {}", TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())], i + 1);
                let caption_len = rng.gen_range(2..5);
                let caption = (0..caption_len)
                    .map(|_| CAPTION_WORDS[rng.gen_range(0..CAPTION_WORDS.len())])
                    .collect::<Vec<_>>()
                    .join(" ");
                let color = [rng.gen_range(40..220), rng.gen_range(40..220), rng.gen_range(40..220)];
                Slide::new(title, caption, color)
            })
            .collect();

        Deck { name: name.into(), slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Parses a deck, rejecting one without slides.
    pub fn from_json(json: &str, origin: &Path) -> Result<Deck> {
        let deck: Deck = serde_json::from_str(json).map_err(|source| CarouselError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        if deck.is_empty() {
            return Err(CarouselError::EmptyDeck(deck.name));
        }
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Deck> {
        let json = fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json(&json, path)?;
        log::info!("Loaded deck '{}' ({} slides) from {}", deck.name, deck.len(), path.display());
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deck() {
        let deck = Deck::demo();
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.get(0).map(|s| s.title.as_str()), Some("Harbour"));
        assert!(deck.get(5).is_none());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = Deck::generate("a", 8, 42);
        let b = Deck::generate("a", 8, 42);
        let c = Deck::generate("a", 8, 7);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_generated_titles_are_numbered() {
        let deck = Deck::generate("numbered", 3, 1);
        for (i, slide) in deck.slides.iter().enumerate() {
            assert!(slide.title.ends_with(&format!(" {}", i + 1)));
            assert!(!slide.caption.is_empty());
        }
    }

    #[test]
    fn test_caption_is_optional() {
        let deck = Deck::from_json(
            r#"{"name":"n","slides":[{"title":"t","color":[1,2,3]}]}"#,
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(deck.slides[0].caption, "");
    }

    #[test]
    fn test_empty_deck_rejected() {
        let result = Deck::from_json(r#"{"name":"empty","slides":[]}"#, Path::new("inline"));
        assert!(matches!(result, Err(CarouselError::EmptyDeck(name)) if name == "empty"));
    }

    #[test]
    fn test_missing_file() {
        let result = Deck::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CarouselError::Io { .. })));
    }
}
