//! Logging and debugging facilities for swatchbook.
//!
//! swatchbook uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so a filter such as
//! `RUST_LOG=swatchbook_core::timer=trace` isolates a single subsystem.
//!
//! This module also carries the options used when rendering hierarchical
//! debug output (see [`TreeFormatOptions`]).

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Event loop target.
    pub const EVENT_LOOP: &str = "swatchbook_core::event_loop";
    /// Timer system target.
    pub const TIMER: &str = "swatchbook_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "swatchbook_core::signal";
    /// Color picker widget target.
    pub const PICKER: &str = "swatchbook::picker";
    /// Clipboard access target.
    pub const CLIPBOARD: &str = "swatchbook::clipboard";
    /// Configuration loading target.
    pub const CONFIG: &str = "swatchbook::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain indentation, no branch characters.
    Compact,
}

impl TreeStyle {
    /// Prefix drawn before a node: `(branch for a middle child, branch for the last child)`.
    pub fn branches(self) -> (&'static str, &'static str) {
        match self {
            Self::Ascii => ("|-- ", "`-- "),
            Self::Unicode => ("├── ", "└── "),
            Self::Compact => ("", ""),
        }
    }

    /// Continuation drawn under a node: `(under a middle child, under the last child)`.
    pub fn continuations(self) -> (&'static str, &'static str) {
        match self {
            Self::Ascii => ("|   ", "    "),
            Self::Unicode => ("│   ", "    "),
            Self::Compact => ("  ", "  "),
        }
    }
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show style details (colors, sizes) next to each node.
    pub show_styles: bool,
    /// Whether to show the action a node triggers.
    pub show_actions: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_styles: true,
            show_actions: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output: structure and text only.
    pub fn minimal() -> Self {
        Self {
            show_styles: false,
            show_actions: false,
            ..Default::default()
        }
    }

    /// Use the given branch style.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_style_branches() {
        assert_eq!(TreeStyle::Ascii.branches(), ("|-- ", "`-- "));
        assert_eq!(TreeStyle::default(), TreeStyle::Unicode);
        assert_eq!(TreeStyle::Compact.branches().0, "");
    }

    #[test]
    fn test_tree_format_minimal() {
        let options = TreeFormatOptions::minimal().with_style(TreeStyle::Ascii);
        assert!(!options.show_styles);
        assert!(!options.show_actions);
        assert_eq!(options.style, TreeStyle::Ascii);
        assert_eq!(options.max_depth, None);
    }
}
