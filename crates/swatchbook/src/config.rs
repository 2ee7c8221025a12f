//! Color picker configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock picker. Configuration is read-only: the picker never writes it back.
//!
//! # Example
//!
//! ```toml
//! initial_color = "#FFFFFF"
//! presets = ["#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF"]
//! confirmation_ms = 1500
//! start_dark = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use swatchbook_core::logging::targets;

/// Number of preset swatches the picker shows.
pub const PRESET_COUNT: usize = 5;

/// The stock preset swatches.
pub const DEFAULT_PRESETS: [&str; PRESET_COUNT] =
    ["#FF5733", "#33FF57", "#3357FF", "#FFFF33", "#FF33FF"];

/// Errors raised while loading a [`PickerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but a value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for one [`ColorPickerWidget`](crate::widget::ColorPickerWidget).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Color shown before any interaction.
    pub initial_color: String,
    /// Quick-select swatches; exactly [`PRESET_COUNT`] entries.
    pub presets: Vec<String>,
    /// Message shown after a successful copy.
    pub confirmation_text: String,
    /// Message shown when the clipboard rejects the copy.
    pub copy_failed_text: String,
    /// How long the copy message stays visible, in milliseconds.
    pub confirmation_ms: u64,
    /// Start in dark mode.
    pub start_dark: bool,
    /// Card heading.
    pub title: String,
    /// Line under the heading.
    pub description: String,
    /// Name credited in the footer.
    pub author: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: "#000000".to_string(),
            presets: DEFAULT_PRESETS.iter().map(|p| p.to_string()).collect(),
            confirmation_text: "Copied!".to_string(),
            copy_failed_text: "Copy failed".to_string(),
            confirmation_ms: 2000,
            start_dark: false,
            title: "🎨 Color Picker".to_string(),
            description: "Choose a color, explore options, and copy its code with ease."
                .to_string(),
            author: "Aaraiz".to_string(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(target: targets::CONFIG, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else the per-user config file if it exists,
    /// else the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!(target: targets::CONFIG, "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.len() != PRESET_COUNT {
            return Err(ConfigError::Invalid(format!(
                "expected {PRESET_COUNT} presets, found {}",
                self.presets.len()
            )));
        }
        if self.confirmation_ms == 0 {
            return Err(ConfigError::Invalid(
                "confirmation_ms must be greater than zero".to_string(),
            ));
        }
        if self.confirmation_text.is_empty() || self.copy_failed_text.is_empty() {
            return Err(ConfigError::Invalid(
                "copy messages must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// How long the copy message stays visible.
    pub fn confirmation_duration(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

/// `<config dir>/swatchbook/config.toml` for the current user, if the
/// platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "swatchbook").map(|dirs| dirs.config_dir().join("config.toml"))
}
