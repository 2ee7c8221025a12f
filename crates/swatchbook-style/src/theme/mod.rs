//! The two built-in themes.

mod palette;

pub use palette::ThemePalette;

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The mode for a dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Lowercase name, e.g. for log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A complete theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ThemePalette,
}

impl Theme {
    /// Create the light theme.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            palette: ThemePalette::light(),
        }
    }

    /// Create the dark theme.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            palette: ThemePalette::dark(),
        }
    }

    /// The built-in theme for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_round_trip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert!(ThemeMode::from_dark(true).is_dark());
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_for_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::default().mode, ThemeMode::Light);
        assert_eq!(Theme::dark().palette, ThemePalette::dark());
    }
}
