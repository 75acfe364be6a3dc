use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to walk music directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not one of the known audio formats.
    #[error("unsupported audio format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// No file of a song carried track, title, artist and album.
    #[error("could not find sufficient tags in any of {paths:?}")]
    InsufficientTags { paths: Vec<PathBuf> },
}
