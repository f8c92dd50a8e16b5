//! Writes a randomly generated slide deck for trying out the carousel.
//!
//! ```text
//! carousel-deckgen deck.json --slides 8 --seed 7
//! carousel-gui deck.json
//! ```

use anyhow::Result;
use clap::Parser;
use rcarousel::{Deck, DeckWriter};

#[derive(Parser, Debug)]
#[command(name = "carousel-deckgen", about = "Generate a random carousel deck")]
struct Args {
    /// Output JSON file
    output: String,

    /// Number of slides
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    slides: u32,

    /// Seed for the random generator (same seed, same deck)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Deck name shown in the GUI
    #[arg(long, default_value = "Generated")]
    name: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let deck = Deck::generate(&args.name, args.slides as usize, args.seed);
    let mut writer = DeckWriter::new(&args.output, &deck.name);
    writer.write_deck(&deck);
    let written = writer.finish()?;

    println!("Deck '{}' with {} slides written to: {}", deck.name, written, args.output);
    Ok(())
}
