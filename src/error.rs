use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// The downstream sink rejected a write or flush.
    #[error("downstream write failed: {0}")]
    Sink(#[source] io::Error),

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("chunk size must be at least 1 byte")]
    InvalidChunkSize,
}

pub type Result<T> = std::result::Result<T, FilterError>;
