//! Events understood by the color picker.

use swatchbook_core::TimerId;

/// A user interaction or timer notification routed to
/// [`ColorPickerWidget::dispatch`](crate::widget::ColorPickerWidget::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A preset swatch was clicked.
    SelectPreset(usize),
    /// The color text field changed to the given text.
    EditColorText(String),
    /// The "Copy Color Code" button was clicked.
    CopyToClipboard,
    /// The theme toggle button was clicked.
    ToggleTheme,
    /// A timer fired.
    Timer {
        /// The timer that fired.
        id: TimerId,
    },
}

static_assertions::assert_impl_all!(PickerEvent: Send, Sync);
