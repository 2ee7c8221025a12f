//! Convenient re-exports for hosts embedding the color picker.
//!
//! ```
//! use swatchbook::prelude::*;
//! ```

pub use crate::config::{ConfigError, PickerConfig};
pub use crate::platform::{ClipboardBackend, ClipboardError, MemoryClipboard, SystemClipboard};
pub use crate::widget::{ColorPickerWidget, PickerEvent, Role, View, ViewNode};

pub use swatchbook_core::{
    ControlFlow, EventLoop, EventLoopProxy, LoopEvent, SharedTimerManager, Signal, TimerId,
    TreeFormatOptions, TreeStyle,
};
pub use swatchbook_style::prelude::*;
