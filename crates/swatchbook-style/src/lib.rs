//! Colors and themes for swatchbook.
//!
//! This crate provides:
//!
//! - **Color**: An 8-bit RGBA color with hex parsing and formatting
//! - **Fill**: Solid colors and two-stop linear gradients
//! - **Themes**: The fixed light and dark variants of the color picker
//!
//! # Example
//!
//! ```
//! use swatchbook_style::prelude::*;
//!
//! let theme = Theme::for_mode(ThemeMode::Dark);
//! assert_eq!(theme.palette.card_background, Color::from_hex("#1F2937").unwrap());
//! assert_eq!(theme.mode.toggled(), ThemeMode::Light);
//! ```

mod color;
mod error;
pub mod theme;

pub use color::{Color, Fill};
pub use error::{Error, Result};
pub use theme::{Theme, ThemeMode, ThemePalette};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{Color, Fill};
    pub use crate::theme::{Theme, ThemeMode, ThemePalette};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports_themes() {
        let palette: ThemePalette = Theme::for_mode(ThemeMode::Dark).palette;
        assert_eq!(palette, ThemePalette::dark());
        assert_eq!(Color::parse("#111827"), Ok(Color::from_u32(0x111827)));
    }
}
