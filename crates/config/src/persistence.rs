//! Reading and writing config files on disk.
//!
//! Files may be JSON5 (comments and trailing commas welcome) or plain
//! JSON; one parser handles both. Writes always emit pretty-printed
//! JSON because serde_json5 has no serializer.
//!
//! Lookup probes the working directory first (`tack.json5`, then
//! `tack.json`), then the user directory (`~/.config/tack/config.json5`
//! or `config.json`). The first file that exists wins.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names probed in the working directory, highest priority first.
const LOCAL_CANDIDATES: &[&str] = &["tack.json5", "tack.json"];

/// Subdirectory of the platform config directory that belongs to tack.
const USER_DIR_NAME: &str = "tack";

/// File names probed inside the user config directory.
const USER_CANDIDATES: &[&str] = &["config.json5", "config.json"];

/// Every location a config file may live in, highest priority first.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = LOCAL_CANDIDATES.iter().map(PathBuf::from).collect();

    if let Some(base) = dirs::config_dir() {
        let user_dir = base.join(USER_DIR_NAME);
        candidates.extend(USER_CANDIDATES.iter().map(|name| user_dir.join(name)));
    }

    candidates
}

/// Locates the config file to load, if any exists.
///
/// Probes the candidate locations in priority order and returns the
/// first path that exists on disk.
///
/// # Examples
///
/// ```no_run
/// use tack_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("loading {}", path.display()),
///     None => println!("no config file, using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|path| path.exists())
}

/// Reads `path` and deserializes it as JSON5 (or plain JSON).
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] when the file cannot be read and
/// [`ConfigError::ParseJson5`] when its contents do not deserialize.
///
/// # Examples
///
/// ```no_run
/// use tack_config::Config;
/// use tack_config::persistence::read_config_file;
///
/// # fn main() -> tack_config::Result<()> {
/// let config: Config = read_config_file("tack.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    // serde_json5 accepts plain JSON too, so one parser covers both
    // extensions.
    Ok(serde_json5::from_str(&text)?)
}

/// Serializes `config` as pretty-printed JSON and writes it to `path`.
///
/// Missing parent directories are created on the way.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] when serialization fails and
/// [`ConfigError::WriteFile`] when the directory or file cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use tack_config::Config;
/// use tack_config::persistence::write_config_file;
///
/// # fn main() -> tack_config::Result<()> {
/// write_config_file("tack.json", &Config::default())?;
/// # Ok(())
/// # }
/// ```
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.exists()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let text = serde_json::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(io_error)
}
