//! Shared styling derived from the user configuration.
//!
//! The widgets take their focus accent and dimmed chrome colors from a
//! [`BoardStyle`] instead of hardcoding them, so a configured accent
//! shows up everywhere at once.

use ratatui::style::Color;
use tack_config::{Config, Theme};

/// Colors applied across the board widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    /// Accent for the focused column border and selected card.
    pub accent: Color,
    /// Color for unfocused borders and secondary text.
    pub dim: Color,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            dim: Color::DarkGray,
        }
    }
}

impl BoardStyle {
    /// Derives the widget colors from the user configuration.
    ///
    /// A configured `#rrggbb` accent replaces the default; the theme
    /// picks the dimmed color so secondary text stays readable on
    /// light terminals.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let accent = config
            .accent
            .as_deref()
            .and_then(color_from_hex)
            .unwrap_or(Self::default().accent);
        let dim = match config.theme {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        };
        Self { accent, dim }
    }
}

/// Parses a `#rrggbb` hex color into a terminal color.
///
/// Returns `None` for anything that is not `#` followed by six hex
/// digits, so callers can fall back to a default rather than error.
#[must_use]
pub fn color_from_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
