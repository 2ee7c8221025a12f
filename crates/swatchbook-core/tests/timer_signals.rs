//! Integration tests combining timers, the event loop and signals.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use swatchbook_core::{
    ControlFlow, EventLoop, LoopEvent, ManualClock, Property, SharedTimerManager, Signal,
};

/// A status line that clears itself after a delay, replacing any pending clear.
struct StatusLine {
    text: Property<String>,
    text_changed: Signal<String>,
    pending: Mutex<Option<swatchbook_core::TimerId>>,
    timers: Arc<SharedTimerManager>,
}

impl StatusLine {
    fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self {
            text: Property::new(String::new()),
            text_changed: Signal::new(),
            pending: Mutex::new(None),
            timers,
        }
    }

    fn show(&self, text: &str) {
        if let Some(old) = self.pending.lock().take() {
            let _ = self.timers.stop(old);
        }
        if self.text.set(text.to_string()) {
            self.text_changed.emit(text.to_string());
        }
        *self.pending.lock() = Some(self.timers.start_one_shot(Duration::from_millis(2000)));
    }

    fn on_timer(&self, id: swatchbook_core::TimerId) {
        let mut pending = self.pending.lock();
        if *pending == Some(id) {
            *pending = None;
            if self.text.set(String::new()) {
                self.text_changed.emit(String::new());
            }
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("swatchbook_core=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_replaced_timer_clears_only_once() {
    init_tracing();
    let clock = Arc::new(ManualClock::new());
    let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
    let event_loop = EventLoop::<()>::new(timers.clone());
    let status = StatusLine::new(timers.clone());

    let history = Arc::new(Mutex::new(Vec::new()));
    let history_clone = history.clone();
    status.text_changed.connect(move |text| {
        history_clone.lock().push(text.clone());
    });

    status.show("Copied!");
    clock.advance(Duration::from_millis(1500));
    status.show("Copied!");
    assert_eq!(timers.active_count(), 1);

    clock.advance(Duration::from_millis(600));
    event_loop.pump(|event| {
        if let LoopEvent::Timer { id } = event {
            status.on_timer(id);
        }
        ControlFlow::Continue
    });
    assert_eq!(status.text.get(), "Copied!");

    clock.advance(Duration::from_millis(1400));
    event_loop.pump(|event| {
        if let LoopEvent::Timer { id } = event {
            status.on_timer(id);
        }
        ControlFlow::Continue
    });

    assert_eq!(status.text.get(), "");
    assert_eq!(*history.lock(), vec!["Copied!".to_string(), String::new()]);
    assert_eq!(timers.active_count(), 0);
}
