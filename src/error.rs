//! Error types for the series renamer.

use crate::models::catalog::EpisodeKind;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the series renamer.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog link errors
    #[error("File is not linked to any episode or series: {0}")]
    NotLinked(String),

    #[error("Episode {kind} {number} has no titles")]
    AmbiguousEpisodeTitle { kind: EpisodeKind, number: u32 },

    #[error("Episode group mixes episode kinds")]
    MixedEpisodeGroup,

    // Naming errors
    #[error("Could not generate a filename: {0}")]
    NameGeneration(String),

    #[error("Target file already exists: {0}")]
    NameCollision(String),

    // Input errors
    #[error("Invalid rename request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
