use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Context, Result};
use crate::deck::{Deck, Slide};

/// Collects slides and writes them out as a deck file.
pub struct DeckWriter {
    path: String,
    deck: Deck,
}

impl DeckWriter {
    /// Starts a deck that will be written to `file_path` on [`DeckWriter::finish`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rcarousel::{DeckWriter, Slide};
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = DeckWriter::new("travel.json", "Travel");
    /// writer.write_slide(Slide::new("Coast", "Morning fog", [52, 101, 164]));
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str, name: &str) -> Self {
        Self {
            path: file_path.to_string(),
            deck: Deck { name: name.to_string(), slides: Vec::new() },
        }
    }

    pub fn write_slide(&mut self, slide: Slide) {
        self.deck.slides.push(slide);
    }

    pub fn write_deck(&mut self, deck: &Deck) {
        self.deck.slides.extend(deck.slides.iter().cloned());
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slides.len()
    }

    /// Writes the deck as pretty-printed JSON and returns the number of slides written.
    pub fn finish(self) -> Result<usize> {
        if self.deck.slides.is_empty() {
            anyhow::bail!("Refusing to write empty deck '{}' to {}", self.deck.name, self.path);
        }

        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create file: {}", self.path))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &self.deck)
            .with_context(|| format!("Failed to serialize deck to {}", self.path))?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(self.deck.slides.len())
    }
}
