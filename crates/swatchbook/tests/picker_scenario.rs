//! End-to-end scenarios driving the color picker through the event loop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use swatchbook::platform::MemoryClipboard;
use swatchbook::widget::{ColorPickerWidget, PickerEvent, Role};
use swatchbook_core::{
    ControlFlow, EventLoop, LoopEvent, ManualClock, SharedTimerManager, TreeFormatOptions,
    TreeStyle,
};

struct Harness {
    picker: ColorPickerWidget,
    clipboard: MemoryClipboard,
    clock: Arc<ManualClock>,
    event_loop: EventLoop<PickerEvent>,
}

impl Harness {
    fn new() -> Self {
        let clock = Arc::new(ManualClock::new());
        let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
        let clipboard = MemoryClipboard::new();
        let picker = ColorPickerWidget::new(timers.clone(), clipboard.clone());
        Self {
            picker,
            clipboard,
            clock,
            event_loop: EventLoop::new(timers),
        }
    }

    /// Post an event the way a host would after a click or keystroke.
    fn post(&self, event: PickerEvent) {
        self.event_loop.proxy().send(event).unwrap();
    }

    /// Deliver everything that is due.
    fn pump(&mut self) -> usize {
        let picker = &mut self.picker;
        self.event_loop.pump(|event| {
            match event {
                LoopEvent::Timer { id } => {
                    picker.dispatch(PickerEvent::Timer { id });
                }
                LoopEvent::User(event) => {
                    picker.dispatch(event);
                }
                LoopEvent::Quit => return ControlFlow::Exit,
            }
            ControlFlow::Continue
        })
    }

    fn advance(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.pump();
    }
}

#[test]
fn test_select_copy_and_expire() {
    let mut h = Harness::new();
    assert!(!h.picker.is_dark_mode());

    let preset = h.picker.preset(0).unwrap().to_string();
    assert_eq!(preset, "#FF5733");
    h.post(PickerEvent::SelectPreset(0));
    h.post(PickerEvent::CopyToClipboard);
    assert_eq!(h.pump(), 2);

    let view = h.picker.render();
    assert_eq!(view.preview_value(), Some("#FF5733"));
    assert_eq!(view.confirmation_text(), Some("Copied!"));
    assert_eq!(h.clipboard.contents().as_deref(), Some("#FF5733"));

    h.advance(2000);
    let view = h.picker.render();
    assert_eq!(view.confirmation_text(), None);
    assert!(view.find(Role::Confirmation).is_none());
    assert_eq!(view.preview_value(), Some("#FF5733"));
}

#[test]
fn test_edit_during_confirmation_is_never_undone() {
    let mut h = Harness::new();
    h.post(PickerEvent::CopyToClipboard);
    h.pump();
    h.advance(1000);

    h.post(PickerEvent::EditColorText("#abcdef".into()));
    h.pump();
    assert_eq!(h.picker.copy_status(), "");

    let history = Arc::new(Mutex::new(Vec::new()));
    let history_clone = history.clone();
    h.picker.copy_status_changed.connect(move |status| {
        history_clone.lock().push(status.clone());
    });

    h.advance(3000);
    assert_eq!(h.picker.copy_status(), "");
    assert!(history.lock().is_empty());
    assert_eq!(h.picker.color(), "#abcdef");
}

#[test]
fn test_second_copy_restarts_confirmation() {
    let mut h = Harness::new();
    h.post(PickerEvent::CopyToClipboard);
    h.pump();
    h.advance(1500);

    h.post(PickerEvent::SelectPreset(3));
    h.post(PickerEvent::CopyToClipboard);
    h.pump();
    assert_eq!(h.clipboard.contents().as_deref(), Some("#FFFF33"));

    h.advance(1000);
    assert_eq!(h.picker.copy_status(), "Copied!");

    h.advance(1000);
    assert_eq!(h.picker.copy_status(), "");
    assert!(!h.picker.has_pending_confirmation());
}

#[test]
fn test_failed_copy_recovers() {
    let mut h = Harness::new();
    h.clipboard.set_failure(Some("no owner"));
    h.post(PickerEvent::CopyToClipboard);
    h.pump();
    assert_eq!(h.picker.render().confirmation_text(), Some("Copy failed"));

    h.clipboard.set_failure(None);
    h.post(PickerEvent::CopyToClipboard);
    h.pump();
    assert_eq!(h.picker.render().confirmation_text(), Some("Copied!"));
    assert_eq!(h.clipboard.contents().as_deref(), Some("#000000"));

    h.advance(2000);
    assert_eq!(h.picker.copy_status(), "");
}

#[test]
fn test_theme_toggle_via_view_action() {
    let mut h = Harness::new();
    let view = h.picker.render();
    let action = view
        .find(Role::ThemeToggle)
        .and_then(|node| node.on_click())
        .cloned()
        .unwrap();
    assert_eq!(action, PickerEvent::ToggleTheme);

    h.post(action.clone());
    h.pump();
    assert!(h.picker.is_dark_mode());
    assert_eq!(h.picker.render().theme_toggle_label(), Some("Light Mode"));

    h.post(action);
    h.pump();
    assert!(!h.picker.is_dark_mode());
    assert_eq!(h.picker.render().theme_toggle_label(), Some("Dark Mode"));
}

#[test]
fn test_rendered_tree_outline() {
    let h = Harness::new();
    let text = h
        .picker
        .render()
        .format(&TreeFormatOptions::minimal().with_style(TreeStyle::Ascii));

    for role in [
        "page",
        "theme-toggle",
        "card",
        "title",
        "description",
        "presets",
        "preset[0]",
        "preset[4]",
        "preview",
        "color-input",
        "copy-button",
        "footer",
        "author",
    ] {
        assert!(text.contains(role), "missing {role} in\n{text}");
    }
    assert!(!text.contains("confirmation"));
    assert!(text.contains("\"Copy Color Code\""));
    assert!(text.contains("\"Made with ❤️ by \""));
}
