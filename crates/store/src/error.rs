//! Failure modes of board persistence.

use std::path::PathBuf;

/// Anything that can go wrong while loading or saving a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot file exists but could not be read.
    #[error("cannot read board data at {path}: {source}")]
    ReadFile {
        /// Which file the read targeted.
        path: PathBuf,
        /// What the filesystem said.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file or its parent directory could not be written.
    #[error("cannot write board data at {path}: {source}")]
    WriteFile {
        /// Which file the write targeted.
        path: PathBuf,
        /// What the filesystem said.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot exists but is not the JSON shape this version writes,
    /// or an in-memory board refused to serialize.
    #[error("board data is not usable JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform data directory to put the snapshot in.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// Shorthand for results carrying a [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
