//! Clipboard access for copying color codes.
//!
//! [`ClipboardBackend`] is the seam the color picker writes through.
//! [`SystemClipboard`] is a thin wrapper around the `arboard` crate;
//! [`MemoryClipboard`] keeps the text in process, for tests and for hosts
//! without a display.
//!
//! # Platform Notes
//!
//! - **Windows**: Uses the Win32 clipboard API
//! - **macOS**: Uses NSPasteboard
//! - **Linux**: Uses X11 selections or Wayland data-control protocol. The
//!   copied text is served by this process, so the `SystemClipboard` must
//!   stay alive for other applications to paste it.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use swatchbook_core::logging::targets;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was reachable but rejected the text.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// A destination for copied text.
pub trait ClipboardBackend {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Short backend name for log output.
    fn name(&self) -> &'static str;
}

impl<B: ClipboardBackend + ?Sized> ClipboardBackend for Box<B> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The platform clipboard.
///
/// The underlying `arboard::Clipboard` is opened on first write and kept for
/// the lifetime of this value. A failed open is retried on the next write.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a handle; the platform clipboard is opened lazily.
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn inner(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let inner = match self.inner.take() {
            Some(inner) => inner,
            None => {
                let opened = arboard::Clipboard::new()
                    .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
                tracing::debug!(target: targets::CLIPBOARD, "opened system clipboard");
                opened
            }
        };
        Ok(self.inner.insert(inner))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner()?
            .set_text(text)
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    failure: Option<String>,
    writes: usize,
}

/// An in-process clipboard.
///
/// Clones share the same contents, so a test can keep one handle while the
/// widget owns another.
///
/// # Example
///
/// ```
/// use swatchbook::platform::{ClipboardBackend, MemoryClipboard};
///
/// let clipboard = MemoryClipboard::new();
/// let mut writer = clipboard.clone();
/// writer.set_text("#FF5733").unwrap();
/// assert_eq!(clipboard.contents().as_deref(), Some("#FF5733"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.state.lock().contents.clone()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }

    /// Make every following write fail with `message`, or succeed again with `None`.
    pub fn set_failure(&self, message: Option<&str>) {
        self.state.lock().failure = message.map(str::to_string);
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.state.lock();
        if let Some(message) = &state.failure {
            return Err(ClipboardError::WriteFailed(message.clone()));
        }
        state.contents = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

static_assertions::assert_impl_all!(MemoryClipboard: Send, Sync, Clone);
static_assertions::assert_impl_all!(ClipboardError: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_contents() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        let mut writer = clipboard.clone();
        writer.set_text("#33FF57").unwrap();
        writer.set_text("#3357FF").unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("#3357FF"));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[test]
    fn test_memory_clipboard_failure() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_failure(Some("permission denied"));

        let mut writer = clipboard.clone();
        let err = writer.set_text("#000000").unwrap_err();
        assert_eq!(err, ClipboardError::WriteFailed("permission denied".into()));
        assert_eq!(err.to_string(), "clipboard write failed: permission denied");
        assert_eq!(clipboard.contents(), None);

        clipboard.set_failure(None);
        writer.set_text("#000000").unwrap();
        assert_eq!(clipboard.write_count(), 1);
    }

    #[test]
    fn test_system_clipboard_is_lazy() {
        // Opening may fail in CI environments without a display; creating the
        // handle must not touch the platform at all.
        let clipboard = SystemClipboard::new();
        assert_eq!(clipboard.name(), "system");
        assert_eq!(format!("{clipboard:?}"), "SystemClipboard { open: false }");
    }

    #[test]
    fn test_clipboard_error_display() {
        let error = ClipboardError::Unavailable("no display".into());
        assert_eq!(error.to_string(), "clipboard unavailable: no display");
    }
}
