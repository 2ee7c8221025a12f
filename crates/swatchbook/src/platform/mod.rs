//! Platform services used by the color picker.

mod clipboard;

pub use clipboard::{ClipboardBackend, ClipboardError, MemoryClipboard, SystemClipboard};
