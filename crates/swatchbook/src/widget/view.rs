//! The declarative view tree a color picker renders to.
//!
//! The host toolkit supplies the actual card, button and text input
//! primitives and paints them; the widget only describes what to show. Each
//! node carries a [`Role`] so hosts and tests can find the parts they care
//! about without depending on tree shape.
//!
//! # Layout
//!
//! ```text
//! +--------------------------------------------+
//! |                               [Dark Mode]  |
//! |        +--------------------------+        |
//! |        |     🎨 Color Picker      |        |
//! |        |  ( ) ( ) ( ) ( ) ( )     |        |
//! |        |        [ preview ]       |        |
//! |        |  [ #000000            ]  |        |
//! |        |  [   Copy Color Code   ]  |        |
//! |        |         Copied!          |        |
//! |        +--------------------------+        |
//! |           Made with ❤️ by Aaraiz           |
//! +--------------------------------------------+
//! ```

use std::fmt::{self, Write as FmtWrite};

use swatchbook_core::{TreeFormatOptions, TreeStyle};
use swatchbook_style::{Color, Fill};

use super::events::PickerEvent;

/// Diameter of a preset swatch, in logical pixels.
pub const PRESET_SWATCH_SIZE: f32 = 32.0;
/// Edge length of the preview swatch, in logical pixels.
pub const PREVIEW_SWATCH_SIZE: f32 = 80.0;
/// Width of the card, in logical pixels.
pub const CARD_WIDTH: f32 = 384.0;

/// What a node is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The full-viewport root.
    Page,
    /// Light/dark toggle button.
    ThemeToggle,
    /// The card holding the picker.
    Card,
    /// Card heading.
    Title,
    /// Line under the heading.
    Description,
    /// Row holding the preset swatches.
    PresetRow,
    /// The preset swatch at this index.
    PresetSwatch(usize),
    /// Large swatch showing the current color.
    Preview,
    /// Text field bound to the current color.
    ColorInput,
    /// "Copy Color Code" button.
    CopyButton,
    /// Transient copy message.
    Confirmation,
    /// Page footer.
    Footer,
    /// Author name inside the footer.
    Author,
    /// Grouping or static text with no behavior of its own.
    Layout,
}

impl Role {
    fn label(self) -> String {
        match self {
            Self::Page => "page".into(),
            Self::ThemeToggle => "theme-toggle".into(),
            Self::Card => "card".into(),
            Self::Title => "title".into(),
            Self::Description => "description".into(),
            Self::PresetRow => "presets".into(),
            Self::PresetSwatch(index) => format!("preset[{index}]"),
            Self::Preview => "preview".into(),
            Self::ColorInput => "color-input".into(),
            Self::CopyButton => "copy-button".into(),
            Self::Confirmation => "confirmation".into(),
            Self::Footer => "footer".into(),
            Self::Author => "author".into(),
            Self::Layout => "group".into(),
        }
    }
}

/// Corner a node is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pinned to the top-right corner of the viewport.
    TopRight,
}

/// Swatch outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchShape {
    /// Round preset swatch.
    Circle,
    /// Square preview swatch with rounded corners.
    RoundedSquare,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Full-viewport container; children are centered in a column.
    Page { background: Fill, text: Color },
    /// Positions its children at a fixed corner of the page.
    Pinned { anchor: Anchor },
    /// Card primitive.
    Card {
        background: Color,
        text: Color,
        width: f32,
    },
    /// Horizontal row.
    Row { gap: f32 },
    /// Heading text.
    Heading { text: String },
    /// Body text. `color` of `None` inherits from the parent.
    Text {
        text: String,
        color: Option<Color>,
        bold: bool,
    },
    /// Colored swatch.
    Swatch {
        /// The style value exactly as stored.
        value: String,
        /// `value` resolved for painting; `None` paints nothing.
        resolved: Option<Color>,
        size: f32,
        shape: SwatchShape,
        border: Color,
        on_click: Option<PickerEvent>,
    },
    /// Single-line text input primitive.
    TextField {
        value: String,
        background: Color,
        text: Color,
        monospace: bool,
        centered: bool,
    },
    /// Button primitive.
    Button {
        label: String,
        background: Color,
        hover: Color,
        text: Color,
        full_width: bool,
        on_click: PickerEvent,
    },
}

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub role: Role,
    pub kind: NodeKind,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// A node without children.
    pub fn leaf(role: Role, kind: NodeKind) -> Self {
        Self {
            role,
            kind,
            children: Vec::new(),
        }
    }

    /// A node with children.
    pub fn parent(role: Role, kind: NodeKind, children: Vec<ViewNode>) -> Self {
        Self {
            role,
            kind,
            children,
        }
    }

    /// Depth-first search for the first node with `role`, including `self`.
    pub fn find(&self, role: Role) -> Option<&ViewNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// The text shown by this node, if it shows any.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Heading { text } | NodeKind::Text { text, .. } => Some(text),
            NodeKind::Button { label, .. } => Some(label),
            NodeKind::TextField { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The event fired when this node is clicked.
    pub fn on_click(&self) -> Option<&PickerEvent> {
        match &self.kind {
            NodeKind::Button { on_click, .. } => Some(on_click),
            NodeKind::Swatch { on_click, .. } => on_click.as_ref(),
            _ => None,
        }
    }

    fn describe(&self, options: &TreeFormatOptions) -> String {
        let mut line = self.role.label();
        match &self.kind {
            NodeKind::Page { background, text } => {
                if options.show_styles {
                    let _ = write!(line, " [background {background}, text {text}]");
                }
            }
            NodeKind::Pinned { anchor } => {
                let _ = write!(line, " pinned {anchor:?}");
            }
            NodeKind::Card {
                background,
                text,
                width,
            } => {
                if options.show_styles {
                    let _ = write!(line, " [background {background}, text {text}, width {width}]");
                }
            }
            NodeKind::Row { .. } => {}
            NodeKind::Heading { text } => {
                let _ = write!(line, " \"{text}\"");
            }
            NodeKind::Text { text, color, bold } => {
                let _ = write!(line, " \"{text}\"");
                if options.show_styles {
                    match (color, bold) {
                        (Some(color), true) => {
                            let _ = write!(line, " [bold, {color}]");
                        }
                        (Some(color), false) => {
                            let _ = write!(line, " [{color}]");
                        }
                        (None, true) => line.push_str(" [bold]"),
                        (None, false) => {}
                    }
                }
            }
            NodeKind::Swatch {
                value,
                resolved,
                size,
                shape,
                ..
            } => {
                let _ = write!(line, " \"{value}\"");
                if options.show_styles {
                    let paint = resolved.map_or_else(|| "none".to_string(), |c| c.to_hex());
                    let _ = write!(line, " [{shape:?} {size}x{size}, paints {paint}]");
                }
            }
            NodeKind::TextField {
                value,
                background,
                text,
                ..
            } => {
                let _ = write!(line, " \"{value}\"");
                if options.show_styles {
                    let _ = write!(line, " [background {background}, text {text}]");
                }
            }
            NodeKind::Button {
                label,
                background,
                text,
                ..
            } => {
                let _ = write!(line, " \"{label}\"");
                if options.show_styles {
                    let _ = write!(line, " [background {background}, text {text}]");
                }
            }
        }
        if options.show_actions {
            if let Some(event) = self.on_click() {
                let _ = write!(line, " -> {event:?}");
            }
        }
        line
    }

    fn format_into(
        &self,
        out: &mut String,
        options: &TreeFormatOptions,
        prefix: &str,
        depth: usize,
    ) {
        if options.max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let is_last = i + 1 == count;
            let (branch, last_branch) = options.style.branches();
            let (cont, last_cont) = options.style.continuations();
            let _ = writeln!(
                out,
                "{prefix}{}{}",
                if is_last { last_branch } else { branch },
                child.describe(options)
            );
            let next = format!("{prefix}{}", if is_last { last_cont } else { cont });
            child.format_into(out, options, &next, depth + 1);
        }
    }
}

/// A rendered color picker.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub root: ViewNode,
}

impl View {
    /// Find the first node with `role`.
    pub fn find(&self, role: Role) -> Option<&ViewNode> {
        self.root.find(role)
    }

    /// The preset swatches in display order.
    pub fn preset_swatches(&self) -> Vec<&ViewNode> {
        self.find(Role::PresetRow)
            .map(|row| {
                row.children
                    .iter()
                    .filter(|node| matches!(node.role, Role::PresetSwatch(_)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The style value of the preview swatch.
    pub fn preview_value(&self) -> Option<&str> {
        match &self.find(Role::Preview)?.kind {
            NodeKind::Swatch { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The confirmation text, if the confirmation line is shown.
    pub fn confirmation_text(&self) -> Option<&str> {
        self.find(Role::Confirmation)?.text()
    }

    /// The label of the theme toggle button.
    pub fn theme_toggle_label(&self) -> Option<&str> {
        self.find(Role::ThemeToggle)?.text()
    }

    /// The page background.
    pub fn background(&self) -> Option<Fill> {
        match self.root.kind {
            NodeKind::Page { background, .. } => Some(background),
            _ => None,
        }
    }

    /// Render the tree as indented text.
    pub fn format(&self, options: &TreeFormatOptions) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.root.describe(options));
        let prefix = if options.style == TreeStyle::Compact { "  " } else { "" };
        self.root.format_into(&mut out, options, prefix, 0);
        out
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&TreeFormatOptions::default()))
    }
}
