use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("the deck has no slides")]
    EmptyDeck,
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid presentation config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("no image files found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("failed to load image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },
}
