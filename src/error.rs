use std::path::PathBuf;

/// Errors raised while configuring a carousel or loading its content.
///
/// Navigation itself never fails once a controller has been built.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptySlides,

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidSwipeThreshold(f32),

    #[error("deck '{0}' contains no slides")]
    EmptyDeck(String),

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
