//! The color picker widget and the view tree it renders to.

mod color_picker;
mod events;
pub mod view;

pub use color_picker::ColorPickerWidget;
pub use events::PickerEvent;
pub use view::{Anchor, NodeKind, Role, SwatchShape, View, ViewNode};
