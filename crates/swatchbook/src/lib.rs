//! Swatchbook: a small color picker widget.
//!
//! The picker keeps three pieces of state (the current color text, a
//! transient copy message and the theme) and renders them to a [`View`]
//! tree that a host paints. User interactions arrive as
//! [`PickerEvent`]s; the copy message is cleared by a one-shot timer from a
//! [`SharedTimerManager`](swatchbook_core::SharedTimerManager) that the host
//! drives, usually through an [`EventLoop`](swatchbook_core::EventLoop).
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use swatchbook::prelude::*;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let mut picker = ColorPickerWidget::new(timers, MemoryClipboard::new());
//!
//! picker.dispatch(PickerEvent::SelectPreset(2));
//! assert_eq!(picker.color(), "#3357FF");
//!
//! let view = picker.render();
//! assert_eq!(view.preview_value(), Some("#3357FF"));
//! println!("{view}");
//! ```
//!
//! [`View`]: widget::View
//! [`PickerEvent`]: widget::PickerEvent

pub mod config;
pub mod platform;
pub mod prelude;
pub mod widget;
