//! Text formatting utilities for the carousel GUI.

use std::time::Duration;

/// Formats an autoplay period.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_interval(2000), "2 s");
/// assert_eq!(format_interval(750), "750 ms");
/// ```
pub fn format_interval(interval_ms: u64) -> String {
    if interval_ms >= 1000 && interval_ms % 1000 == 0 {
        format!("{} s", interval_ms / 1000)
    } else if interval_ms >= 1000 {
        format!("{:.1} s", interval_ms as f64 / 1000.0)
    } else {
        format!("{} ms", interval_ms)
    }
}

/// Formats the time left until the next advance with one decimal.
pub fn format_countdown(remaining: Duration) -> String {
    format!("{:.1} s", remaining.as_secs_f32())
}

/// "Slide 2 / 5" for a zero-based index.
pub fn format_position(index: usize, count: usize) -> String {
    format!("Slide {} / {}", index + 1, count)
}
