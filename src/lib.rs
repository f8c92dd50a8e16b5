pub mod traits;
pub mod error;
pub mod config;
pub mod input;
pub mod controller;
pub mod scheduler;
pub mod view;
pub mod deck;
pub mod writer;
pub mod theme;

// Export host seams
pub use traits::{SlideView, Scheduler, TimerHandle, PlayGlyph};

// Export the state machine
pub use controller::{CarouselController, Playback, Swipe, classify_swipe, normalize_index};

// Export configuration and errors
pub use config::{CarouselConfig, ManualNavigation, default_config_path};
pub use error::CarouselError;

// Export input vocabulary
pub use input::{InputEvent, InputOutcome, InputMap, Key, KeyBinding, Command};

// Export built-in host implementations
pub use scheduler::VirtualScheduler;
pub use view::MarkerView;

// Export content model
pub use deck::{Deck, Slide};
pub use writer::DeckWriter;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
