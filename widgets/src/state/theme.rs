//! Light/dark theme preference.
//!
//! The stored value is the lowercase theme name. Anything unrecognised,
//! including a missing key, reads as [`Theme::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// UI color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored (or `data-theme`) value.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button glyph: the theme you would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Toggle button tooltip.
    #[must_use]
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Cambiar a modo oscuro",
            Self::Dark => "Cambiar a modo claro",
        }
    }
}
