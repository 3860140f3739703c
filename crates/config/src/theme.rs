//! Color themes for the terminal UI.

use serde::{Deserialize, Serialize};

/// The color theme the UI renders with.
///
/// # Examples
///
/// ```
/// use tack_config::Theme;
///
/// assert_eq!(Theme::default(), Theme::Dark);
/// assert_eq!(Theme::Light.display_name(), "Light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// Returns all themes.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Dark, Self::Light]
    }

    /// Returns a human-readable display name for the theme.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn theme_json_format() {
        let json = serde_json::to_string(&Theme::Dark).expect("serialize");
        assert_eq!(json, r#""dark""#);

        let json = serde_json::to_string(&Theme::Light).expect("serialize");
        assert_eq!(json, r#""light""#);
    }

    #[test]
    fn theme_serialization_roundtrip() {
        for theme in Theme::all() {
            let json = serde_json::to_string(&theme).expect("serialize");
            let parsed: Theme = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(theme, parsed);
        }
    }
}
