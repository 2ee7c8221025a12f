//! Core systems for swatchbook.
//!
//! This crate provides the foundational pieces the color picker widget is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Values with change detection
//! - **Timers**: One-shot timers driven by a pluggable [`Clock`]
//! - **Event Loop**: A headless loop multiplexing posted events and timer deadlines
//!
//! # Signal/Slot Example
//!
//! ```
//! use swatchbook_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use swatchbook_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.increment();
//! assert_eq!(counter.value.get(), 1);
//! ```
//!
//! # Event Loop Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use swatchbook_core::{ControlFlow, EventLoop, LoopEvent, SharedTimerManager};
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let event_loop = EventLoop::<&'static str>::new(timers.clone());
//! timers.start_one_shot(Duration::from_millis(5));
//!
//! event_loop.run(|event| match event {
//!     LoopEvent::Timer { .. } => ControlFlow::Exit,
//!     _ => ControlFlow::Continue,
//! })?;
//! # Ok::<(), swatchbook_core::CoreError>(())
//! ```

mod error;
mod event;
mod event_loop;
pub mod logging;
pub mod property;
pub mod signal;
mod timer;

pub use error::{CoreError, Result};
pub use event::LoopEvent;
pub use event_loop::{ControlFlow, EventLoop, EventLoopProxy};
pub use logging::{TreeFormatOptions, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SharedTimerManager, SystemClock, TimerId, TimerManager};
