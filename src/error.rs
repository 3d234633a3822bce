//! Error type shared by both games.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested theme is not in the catalogue.
    #[error("Invalid theme selected.")]
    InvalidTheme(String),

    /// The player count could not be read as a non-negative integer.
    #[error("invalid player count '{0}'")]
    InvalidPlayerCount(String),

    /// Embedded theme data failed to load.
    #[error("theme file {file}: {reason}")]
    Catalogue { file: String, reason: String },

    #[error("config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
