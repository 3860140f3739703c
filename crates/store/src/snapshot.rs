//! Board data reading and writing.
//!
//! The whole store persists as a single pretty-printed JSON document. A
//! snapshot is written on exit and read back on the next launch; there
//! is no incremental persistence and no migration machinery.
//!
//! # File Location
//!
//! By default the snapshot lives in the platform data directory, e.g.
//! `~/.local/share/tack/board.json` on Linux. The configuration can
//! point somewhere else.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::memory::MemoryStore;

/// Directory under the platform data dir holding tack's data.
const DATA_DIR: &str = "tack";

/// File name of the board snapshot.
const DATA_FILE: &str = "board.json";

/// Returns the default location of the board snapshot.
///
/// This is typically `~/.local/share/tack/board.json` on Linux.
///
/// # Errors
///
/// Returns an error if the platform data directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use tack_store::snapshot::default_data_path;
///
/// let path = default_data_path().unwrap();
/// println!("Board snapshot: {}", path.display());
/// ```
pub fn default_data_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(DATA_DIR).join(DATA_FILE))
        .ok_or(StoreError::NoDataDirectory)
}

/// Reads a board snapshot from a file.
///
/// # Arguments
///
/// * `path` - The path to the snapshot file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not a valid board document
///
/// # Examples
///
/// ```no_run
/// use tack_store::snapshot::load_store;
///
/// # fn main() -> tack_store::Result<()> {
/// let store = load_store("board.json")?;
/// println!("{} tasks", store.tasks().len());
/// # Ok(())
/// # }
/// ```
pub fn load_store(path: impl AsRef<Path>) -> Result<MemoryStore> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(StoreError::from)
}

/// Writes a board snapshot to a file.
///
/// The snapshot is written as pretty-printed JSON so it stays pleasant
/// to inspect and hand-edit.
///
/// # Arguments
///
/// * `store` - The store to write
/// * `path` - The path to write to
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The store cannot be serialized
///
/// # Examples
///
/// ```no_run
/// use tack_store::MemoryStore;
/// use tack_store::snapshot::save_store;
///
/// # fn main() -> tack_store::Result<()> {
/// let store = MemoryStore::new();
/// save_store(&store, "board.json")?;
/// # Ok(())
/// # }
/// ```
pub fn save_store(store: &MemoryStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    // Create parent directories if needed
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(store)?;

    std::fs::write(path, content).map_err(|e| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
