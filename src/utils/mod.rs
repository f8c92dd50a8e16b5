//! Utility modules for the carousel GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_interval, format_countdown, format_position};
