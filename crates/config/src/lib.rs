//! Configuration for the tack application.
//!
//! Everything user-tunable lives here: the [`Config`] struct, the theme
//! palette, and the JSON5 file handling behind both.
//!
//! # Overview
//!
//! - [`config`]: The [`Config`] struct, loading, and validation
//! - [`theme`]: Color theme selection
//! - [`persistence`]: Reading and writing config files on disk
//! - [`error`]: What can go wrong while doing any of the above
//!
//! # Where Files Are Found
//!
//! Lookup stops at the first file that exists:
//!
//! 1. Local config (`./tack.json5` or `./tack.json`)
//! 2. User config (`~/.config/tack/config.json5` or `~/.config/tack/config.json`)
//! 3. Built-in defaults when neither exists
//!
//! # File Format
//!
//! Configuration files are JSON5, so comments and trailing commas are fine:
//!
//! ```json5
//! {
//!   // "dark" or "light"
//!   theme: "dark",
//!   // Accent color for the focused column border
//!   accent: "#8b5cf6",
//!   // Override where the board snapshot is stored
//!   data_file: "/home/romain/boards/tack.json",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tack_config::Config;
//!
//! # async fn example() -> tack_config::Result<()> {
//! let config = Config::load().await?;
//!
//! println!("Theme: {}", config.theme.display_name());
//! if let Some(accent) = &config.accent {
//!     println!("Accent: {accent}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod theme;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use theme::Theme;
