//! Failure modes of the configuration layer.
//!
//! Everything that loading, validating, or saving a config file can
//! report funnels into [`ConfigError`].

use std::path::PathBuf;

/// Errors produced while loading, validating, or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists at `path` but reading it failed.
    #[error("could not read config file {path}: {source}")]
    ReadFile {
        /// Location of the unreadable file.
        path: PathBuf,
        /// The I/O error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file or creating its parent directory failed.
    #[error("could not write config file {path}: {source}")]
    WriteFile {
        /// Destination that could not be written.
        path: PathBuf,
        /// The I/O error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not valid JSON5.
    #[error("config file is not valid JSON5: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// The in-memory configuration could not be serialized back to JSON.
    #[error("could not serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The accent color does not name a color the terminal can use.
    #[error("invalid accent color: {reason}")]
    InvalidAccent {
        /// What is wrong with the value.
        reason: String,
    },
}

/// Shorthand result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
