//! Error types for the styling crate.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting style values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text is not a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` color.
    #[error("Invalid color value '{value}'")]
    InvalidColor { value: String },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}
