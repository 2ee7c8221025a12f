//! Color palette definitions for the two picker themes.

use crate::color::{Color, Fill};

// Palette swatches, named by hue and shade.
const WHITE: Color = Color::WHITE;
const GRAY_100: Color = Color::from_u32(0xF3F4F6);
const GRAY_200: Color = Color::from_u32(0xE5E7EB);
const GRAY_300: Color = Color::from_u32(0xD1D5DB);
const GRAY_600: Color = Color::from_u32(0x4B5563);
const GRAY_700: Color = Color::from_u32(0x374151);
const GRAY_800: Color = Color::from_u32(0x1F2937);
const GRAY_900: Color = Color::from_u32(0x111827);
const PURPLE_500: Color = Color::from_u32(0xA855F7);
const BLUE_400: Color = Color::from_u32(0x60A5FA);
const BLUE_500: Color = Color::from_u32(0x3B82F6);
const BLUE_600: Color = Color::from_u32(0x2563EB);
const BLUE_700: Color = Color::from_u32(0x1D4ED8);
const GREEN_400: Color = Color::from_u32(0x4ADE80);
const GREEN_600: Color = Color::from_u32(0x16A34A);

/// Every color the color picker paints with, for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePalette {
    // Page
    /// Full-viewport background.
    pub background: Fill,
    /// Default text color on the page.
    pub text: Color,

    // Theme toggle button
    /// Toggle button background.
    pub toggle_background: Color,
    /// Toggle button background while hovered.
    pub toggle_hover: Color,
    /// Toggle button label color.
    pub toggle_text: Color,

    // Card
    /// Card surface.
    pub card_background: Color,
    /// Text on the card.
    pub card_text: Color,

    // Color text field
    /// Text field background.
    pub input_background: Color,
    /// Text field text.
    pub input_text: Color,

    // Copy button
    /// Copy button background.
    pub copy_background: Color,
    /// Copy button background while hovered.
    pub copy_hover: Color,
    /// Copy button label color.
    pub copy_text: Color,

    // Accents
    /// Confirmation message text.
    pub confirmation_text: Color,
    /// Author name in the footer.
    pub author_text: Color,
    /// Border around preset and preview swatches.
    pub swatch_border: Color,
}

impl ThemePalette {
    /// The light palette: gradient page, white card.
    pub fn light() -> Self {
        Self {
            background: Fill::horizontal(PURPLE_500, BLUE_500),
            text: GRAY_800,

            toggle_background: WHITE,
            toggle_hover: GRAY_200,
            toggle_text: GRAY_800,

            card_background: WHITE,
            card_text: GRAY_800,

            input_background: GRAY_100,
            input_text: GRAY_800,

            copy_background: BLUE_500,
            copy_hover: BLUE_600,
            copy_text: WHITE,

            confirmation_text: GREEN_600,
            author_text: BLUE_700,
            swatch_border: GRAY_300,
        }
    }

    /// The dark palette: near-black page, gray card.
    pub fn dark() -> Self {
        Self {
            background: Fill::Solid(GRAY_900),
            text: WHITE,

            toggle_background: GRAY_700,
            toggle_hover: GRAY_600,
            toggle_text: WHITE,

            card_background: GRAY_800,
            card_text: WHITE,

            input_background: GRAY_700,
            input_text: WHITE,

            copy_background: BLUE_600,
            copy_hover: BLUE_700,
            copy_text: WHITE,

            confirmation_text: GREEN_400,
            author_text: BLUE_400,
            swatch_border: GRAY_300,
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette() {
        let palette = ThemePalette::light();
        assert_eq!(
            palette.background,
            Fill::horizontal(Color::from_u32(0xA855F7), Color::from_u32(0x3B82F6))
        );
        assert_eq!(palette.card_background, Color::WHITE);
        assert_eq!(palette.confirmation_text.to_hex(), "#16A34A");
    }

    #[test]
    fn test_dark_palette() {
        let palette = ThemePalette::dark();
        assert_eq!(palette.background, Fill::Solid(Color::from_u32(0x111827)));
        assert_eq!(palette.text, Color::WHITE);
        assert_eq!(palette.author_text.to_hex(), "#60A5FA");
    }

    #[test]
    fn test_palettes_differ_only_where_themed() {
        let light = ThemePalette::light();
        let dark = ThemePalette::dark();
        assert_ne!(light.background, dark.background);
        assert_eq!(light.copy_text, dark.copy_text);
        assert_eq!(light.swatch_border, dark.swatch_border);
    }
}
