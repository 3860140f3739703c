//! The [`Config`] struct: everything tack reads from its config file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::theme::Theme;

/// Application configuration.
///
/// Everything is optional: a missing configuration file, or an empty
/// one, yields a fully working default setup.
///
/// # Examples
///
/// ```
/// use tack_config::{Config, Theme};
///
/// let config = Config::default();
/// assert_eq!(config.theme, Theme::Dark);
///
/// let config = Config {
///     theme: Theme::Light,
///     accent: Some("#8b5cf6".to_string()),
///     data_file: None,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme for the UI.
    #[serde(default)]
    pub theme: Theme,

    /// Accent color as a `#rrggbb` hex string.
    ///
    /// Used for the focused column border and the carried card. When
    /// unset, the theme's built-in accent applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    /// Where the board snapshot lives.
    ///
    /// When unset, the platform data directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// The default configuration, same as [`Config::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::Config;
    ///
    /// let config = Config::new();
    /// assert!(config.accent.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from wherever a config file is found.
    ///
    /// A `tack.json5` or `tack.json` in the working directory wins over
    /// `config.json5`/`config.json` in the user config directory. With
    /// no file anywhere, the defaults apply.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read, parsed, or validated is
    /// an error; it is not silently replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # async fn example() -> tack_config::Result<()> {
    /// let config = Config::load().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// Unlike [`Config::load`], a missing file here is an error; the
    /// caller named the path on purpose.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or
    /// when its contents fail validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # fn example() -> tack_config::Result<()> {
    /// let config = Config::load_from("my-board.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tack_config::Config;
    ///
    /// # fn example() -> tack_config::Result<()> {
    /// Config::default().save_to("my-config.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Checks the configuration for values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns an error if the accent color is not a `#rrggbb` hex
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.accent = Some("periwinkle".to_string());
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Some(accent) = &self.accent {
            validate_accent(accent)?;
        }
        Ok(())
    }
}

/// Checks that an accent color is `#` followed by six hex digits.
fn validate_accent(accent: &str) -> Result<()> {
    let Some(hex) = accent.strip_prefix('#') else {
        return Err(ConfigError::InvalidAccent {
            reason: format!("{accent:?} does not start with '#'"),
        });
    };
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidAccent {
            reason: format!("{accent:?} is not a '#rrggbb' color"),
        });
    }
    Ok(())
}
