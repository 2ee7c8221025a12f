//! Color picker widget implementation.
//!
//! This module provides [`ColorPickerWidget`], a card with five preset
//! swatches, a preview, a free-text color field, a copy button with a
//! transient confirmation message, and a light/dark theme toggle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use swatchbook::platform::MemoryClipboard;
//! use swatchbook::widget::ColorPickerWidget;
//! use swatchbook_core::SharedTimerManager;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let clipboard = MemoryClipboard::new();
//! let mut picker = ColorPickerWidget::new(timers, clipboard.clone());
//!
//! picker.color_changed.connect(|color| {
//!     println!("Color selected: {color}");
//! });
//!
//! picker.select_preset(0);
//! picker.copy_to_clipboard().unwrap();
//! assert_eq!(clipboard.contents().as_deref(), Some("#FF5733"));
//! assert_eq!(picker.copy_status(), "Copied!");
//! ```
//!
//! # Signals
//!
//! - `color_changed(String)`: the current color text changed
//! - `copy_status_changed(String)`: the confirmation message was shown or cleared
//! - `theme_changed(ThemeMode)`: the theme was toggled
//! - `copied(String)`: a color was written to the clipboard
//! - `copy_failed(String)`: the clipboard rejected a copy; carries the error text

use std::fmt;
use std::sync::Arc;

use swatchbook_core::logging::targets;
use swatchbook_core::{Property, SharedTimerManager, Signal, TimerId};
use swatchbook_style::{Color, Theme, ThemeMode, ThemePalette};

use crate::config::{ConfigError, PickerConfig};
use crate::platform::{ClipboardBackend, ClipboardError};

use super::events::PickerEvent;
use super::view::{
    Anchor, NodeKind, Role, SwatchShape, View, ViewNode, CARD_WIDTH, PRESET_SWATCH_SIZE,
    PREVIEW_SWATCH_SIZE,
};

/// A color picker with preset swatches, clipboard copy and a theme toggle.
///
/// The current color is free text: whatever the user types is stored and
/// rendered verbatim. Copying shows a confirmation message that a one-shot
/// timer clears again; the timer is replaced by every new copy and cancelled
/// by every text edit, so at most one is ever pending.
pub struct ColorPickerWidget {
    config: PickerConfig,

    /// Current color text.
    color: Property<String>,

    /// Confirmation message; empty when hidden.
    copy_status: Property<String>,

    /// Whether the dark theme is active.
    dark_mode: Property<bool>,

    /// Timer that will clear `copy_status`.
    confirmation_timer: Option<TimerId>,

    timers: Arc<SharedTimerManager>,
    clipboard: Box<dyn ClipboardBackend>,

    /// Signal emitted when the color text changes.
    pub color_changed: Signal<String>,
    /// Signal emitted when the confirmation message changes.
    pub copy_status_changed: Signal<String>,
    /// Signal emitted when the theme is toggled.
    pub theme_changed: Signal<ThemeMode>,
    /// Signal emitted after a color was written to the clipboard.
    pub copied: Signal<String>,
    /// Signal emitted when a clipboard write fails.
    pub copy_failed: Signal<String>,
}

impl ColorPickerWidget {
    /// Create a picker with the stock configuration.
    pub fn new(timers: Arc<SharedTimerManager>, clipboard: impl ClipboardBackend + 'static) -> Self {
        Self::build(PickerConfig::default(), timers, Box::new(clipboard))
    }

    /// Create a picker from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn with_config(
        config: PickerConfig,
        timers: Arc<SharedTimerManager>,
        clipboard: impl ClipboardBackend + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, timers, Box::new(clipboard)))
    }

    fn build(
        config: PickerConfig,
        timers: Arc<SharedTimerManager>,
        clipboard: Box<dyn ClipboardBackend>,
    ) -> Self {
        tracing::debug!(
            target: targets::PICKER,
            clipboard = clipboard.name(),
            initial_color = %config.initial_color,
            "color picker created"
        );
        Self {
            color: Property::new(config.initial_color.clone()),
            copy_status: Property::new(String::new()),
            dark_mode: Property::new(config.start_dark),
            confirmation_timer: None,
            timers,
            clipboard,
            config,
            color_changed: Signal::new(),
            copy_status_changed: Signal::new(),
            theme_changed: Signal::new(),
            copied: Signal::new(),
            copy_failed: Signal::new(),
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The current color text.
    pub fn color(&self) -> String {
        self.color.get()
    }

    /// The confirmation message; empty when hidden.
    pub fn copy_status(&self) -> String {
        self.copy_status.get()
    }

    /// Whether the dark theme is active.
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode.get()
    }

    /// The active theme as a [`ThemeMode`].
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark_mode())
    }

    /// The palette of the active theme.
    pub fn palette(&self) -> ThemePalette {
        Theme::for_mode(self.theme_mode()).palette
    }

    /// The preset swatches, in display order.
    pub fn presets(&self) -> &[String] {
        &self.config.presets
    }

    /// The preset at `index`.
    pub fn preset(&self, index: usize) -> Option<&str> {
        self.config.presets.get(index).map(String::as_str)
    }

    /// The configuration this widget was built with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Whether a timer is waiting to clear the confirmation message.
    pub fn has_pending_confirmation(&self) -> bool {
        self.confirmation_timer
            .is_some_and(|id| self.timers.is_active(id))
    }

    /// The pending confirmation timer, if any.
    pub fn confirmation_timer(&self) -> Option<TimerId> {
        self.confirmation_timer
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Select the preset at `index`.
    ///
    /// The confirmation message is left as it is. Returns `false` (and
    /// changes nothing) if there is no preset at `index`.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(value) = self.config.presets.get(index).cloned() else {
            tracing::warn!(target: targets::PICKER, index, "no preset at index");
            return false;
        };
        tracing::debug!(target: targets::PICKER, index, color = %value, "preset selected");
        self.set_color(value);
        true
    }

    /// Select the preset whose value is `value`.
    ///
    /// Returns `false` if `value` is not one of the presets.
    pub fn select_preset_value(&mut self, value: &str) -> bool {
        match self.config.presets.iter().position(|p| p == value) {
            Some(index) => self.select_preset(index),
            None => {
                tracing::warn!(target: targets::PICKER, value, "not a preset");
                false
            }
        }
    }

    /// Replace the color text with whatever the user typed.
    ///
    /// No validation is applied. Any confirmation message is hidden at once
    /// and its pending timer cancelled.
    pub fn edit_color_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(target: targets::PICKER, color = %text, "color text edited");
        self.set_color(text);
        self.cancel_confirmation_timer();
        self.set_copy_status(String::new());
    }

    /// Copy the current color text to the clipboard.
    ///
    /// On success the confirmation text is shown; on failure the failure text
    /// is shown instead and `copy_failed` is emitted. Either message is
    /// cleared after the configured duration. The error is returned for hosts
    /// that want to react to it; the widget has already recovered.
    pub fn copy_to_clipboard(&mut self) -> Result<(), ClipboardError> {
        let color = self.color.get();
        let result = self.clipboard.set_text(&color);

        let message = match &result {
            Ok(()) => {
                tracing::info!(
                    target: targets::CLIPBOARD,
                    backend = self.clipboard.name(),
                    color = %color,
                    "color copied"
                );
                self.copied.emit(color);
                self.config.confirmation_text.clone()
            }
            Err(err) => {
                tracing::warn!(
                    target: targets::CLIPBOARD,
                    backend = self.clipboard.name(),
                    error = %err,
                    "copy to clipboard failed"
                );
                self.copy_failed.emit(err.to_string());
                self.config.copy_failed_text.clone()
            }
        };

        self.set_copy_status(message);
        self.restart_confirmation_timer();
        result
    }

    /// Switch between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme_mode().toggled();
        self.dark_mode.set(mode.is_dark());
        tracing::debug!(target: targets::PICKER, theme = mode.name(), "theme toggled");
        self.theme_changed.emit(mode);
    }

    /// Handle a fired timer.
    ///
    /// Returns `true` if `id` was this widget's pending confirmation timer.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.confirmation_timer != Some(id) {
            return false;
        }
        self.confirmation_timer = None;
        tracing::trace!(target: targets::PICKER, "confirmation expired");
        self.set_copy_status(String::new());
        true
    }

    /// Route an event to the matching operation.
    ///
    /// Returns `true` if the event was consumed. A failed copy is still
    /// consumed; the failure is reported through `copy_failed`.
    pub fn dispatch(&mut self, event: PickerEvent) -> bool {
        match event {
            PickerEvent::SelectPreset(index) => self.select_preset(index),
            PickerEvent::EditColorText(text) => {
                self.edit_color_text(text);
                true
            }
            PickerEvent::CopyToClipboard => {
                let _ = self.copy_to_clipboard();
                true
            }
            PickerEvent::ToggleTheme => {
                self.toggle_theme();
                true
            }
            PickerEvent::Timer { id } => self.handle_timer(id),
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn set_color(&self, value: String) {
        if self.color.set(value.clone()) {
            self.color_changed.emit(value);
        }
    }

    fn set_copy_status(&self, message: String) {
        if self.copy_status.set(message.clone()) {
            self.copy_status_changed.emit(message);
        }
    }

    fn cancel_confirmation_timer(&mut self) {
        if let Some(id) = self.confirmation_timer.take() {
            // May have fired already; handle_timer ignores ids it no longer holds.
            let _ = self.timers.stop(id);
        }
    }

    fn restart_confirmation_timer(&mut self) {
        self.cancel_confirmation_timer();
        self.confirmation_timer = Some(
            self.timers
                .start_one_shot(self.config.confirmation_duration()),
        );
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Describe the widget as a view tree for the host to paint.
    pub fn render(&self) -> View {
        let palette = self.palette();
        let color = self.color.get();
        let status = self.copy_status.get();

        let toggle_label = if self.is_dark_mode() {
            "Light Mode"
        } else {
            "Dark Mode"
        };
        let toggle = ViewNode::parent(
            Role::Layout,
            NodeKind::Pinned {
                anchor: Anchor::TopRight,
            },
            vec![ViewNode::leaf(
                Role::ThemeToggle,
                NodeKind::Button {
                    label: toggle_label.to_string(),
                    background: palette.toggle_background,
                    hover: palette.toggle_hover,
                    text: palette.toggle_text,
                    full_width: false,
                    on_click: PickerEvent::ToggleTheme,
                },
            )],
        );

        let presets = self
            .config
            .presets
            .iter()
            .enumerate()
            .map(|(index, preset)| {
                ViewNode::leaf(
                    Role::PresetSwatch(index),
                    NodeKind::Swatch {
                        value: preset.clone(),
                        resolved: Color::from_hex(preset),
                        size: PRESET_SWATCH_SIZE,
                        shape: SwatchShape::Circle,
                        border: palette.swatch_border,
                        on_click: Some(PickerEvent::SelectPreset(index)),
                    },
                )
            })
            .collect();

        let mut card_children = vec![
            ViewNode::leaf(
                Role::Title,
                NodeKind::Heading {
                    text: self.config.title.clone(),
                },
            ),
            ViewNode::leaf(
                Role::Description,
                NodeKind::Text {
                    text: self.config.description.clone(),
                    color: None,
                    bold: false,
                },
            ),
            ViewNode::parent(Role::PresetRow, NodeKind::Row { gap: 8.0 }, presets),
            ViewNode::leaf(
                Role::Preview,
                NodeKind::Swatch {
                    resolved: Color::from_hex(&color),
                    value: color.clone(),
                    size: PREVIEW_SWATCH_SIZE,
                    shape: SwatchShape::RoundedSquare,
                    border: palette.swatch_border,
                    on_click: None,
                },
            ),
            ViewNode::leaf(
                Role::ColorInput,
                NodeKind::TextField {
                    value: color,
                    background: palette.input_background,
                    text: palette.input_text,
                    monospace: true,
                    centered: true,
                },
            ),
            ViewNode::leaf(
                Role::CopyButton,
                NodeKind::Button {
                    label: "Copy Color Code".to_string(),
                    background: palette.copy_background,
                    hover: palette.copy_hover,
                    text: palette.copy_text,
                    full_width: true,
                    on_click: PickerEvent::CopyToClipboard,
                },
            ),
        ];
        if !status.is_empty() {
            card_children.push(ViewNode::leaf(
                Role::Confirmation,
                NodeKind::Text {
                    text: status,
                    color: Some(palette.confirmation_text),
                    bold: true,
                },
            ));
        }

        let card = ViewNode::parent(
            Role::Card,
            NodeKind::Card {
                background: palette.card_background,
                text: palette.card_text,
                width: CARD_WIDTH,
            },
            card_children,
        );

        let footer = ViewNode::parent(
            Role::Footer,
            NodeKind::Row { gap: 0.0 },
            vec![
                ViewNode::leaf(
                    Role::Layout,
                    NodeKind::Text {
                        text: "Made with ❤️ by ".to_string(),
                        color: None,
                        bold: false,
                    },
                ),
                ViewNode::leaf(
                    Role::Author,
                    NodeKind::Text {
                        text: self.config.author.clone(),
                        color: Some(palette.author_text),
                        bold: true,
                    },
                ),
            ],
        );

        View {
            root: ViewNode::parent(
                Role::Page,
                NodeKind::Page {
                    background: palette.background,
                    text: palette.text,
                },
                vec![toggle, card, footer],
            ),
        }
    }
}

impl fmt::Debug for ColorPickerWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPickerWidget")
            .field("color", &self.color.get())
            .field("copy_status", &self.copy_status.get())
            .field("dark_mode", &self.dark_mode.get())
            .field("confirmation_timer", &self.confirmation_timer)
            .field("clipboard", &self.clipboard.name())
            .finish_non_exhaustive()
    }
}
