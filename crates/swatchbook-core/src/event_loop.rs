//! The headless event loop.
//!
//! The loop blocks on a channel of posted events, waking early whenever the
//! next timer deadline arrives. Timer events are delivered before any posted
//! event that is still waiting in the channel.

use std::sync::Arc;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::error::{CoreError, Result};
use crate::event::LoopEvent;
use crate::logging::targets;
use crate::timer::SharedTimerManager;

/// What the loop should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep processing events.
    Continue,
    /// Return from [`EventLoop::run`].
    Exit,
}

/// A cloneable handle for posting events to an [`EventLoop`] from any thread.
pub struct EventLoopProxy<T> {
    sender: Sender<LoopEvent<T>>,
}

impl<T> Clone for EventLoopProxy<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Send + 'static> EventLoopProxy<T> {
    /// Post an application event.
    ///
    /// Fails once the event loop has been dropped.
    pub fn send(&self, event: T) -> Result<()> {
        self.sender
            .send(LoopEvent::User(event))
            .map_err(|_| CoreError::EventLoopClosed)
    }

    /// Ask the loop to return from `run()`.
    pub fn quit(&self) -> Result<()> {
        tracing::debug!(target: targets::EVENT_LOOP, "quit requested");
        self.sender
            .send(LoopEvent::Quit)
            .map_err(|_| CoreError::EventLoopClosed)
    }
}

/// An event loop multiplexing posted events with timer deadlines.
pub struct EventLoop<T> {
    sender: Sender<LoopEvent<T>>,
    receiver: Receiver<LoopEvent<T>>,
    timers: Arc<SharedTimerManager>,
}

impl<T: Send + 'static> EventLoop<T> {
    /// Create an event loop that fires timers from `timers`.
    pub fn new(timers: Arc<SharedTimerManager>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            sender,
            receiver,
            timers,
        }
    }

    /// A handle for posting events to this loop.
    pub fn proxy(&self) -> EventLoopProxy<T> {
        EventLoopProxy {
            sender: self.sender.clone(),
        }
    }

    /// Run until a handler returns [`ControlFlow::Exit`] or a quit is posted.
    ///
    /// The quit event itself is passed to the handler before the loop returns.
    #[tracing::instrument(skip_all, target = "swatchbook_core::event_loop", level = "debug")]
    pub fn run<F>(&self, mut handler: F) -> Result<()>
    where
        F: FnMut(LoopEvent<T>) -> ControlFlow,
    {
        tracing::debug!(target: targets::EVENT_LOOP, "starting event loop");

        loop {
            if self.dispatch_expired(&mut handler) == ControlFlow::Exit {
                return Ok(());
            }

            let received = match self.timers.time_until_next() {
                Some(wait) => self.receiver.recv_timeout(wait),
                None => self
                    .receiver
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(event) => {
                    let quit = event.is_quit();
                    if handler(event) == ControlFlow::Exit || quit {
                        tracing::debug!(target: targets::EVENT_LOOP, "event loop exiting");
                        return Ok(());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Err(CoreError::EventLoopClosed),
            }
        }
    }

    /// Deliver fired timers and already-posted events without blocking.
    ///
    /// Returns the number of events delivered.
    pub fn pump<F>(&self, mut handler: F) -> usize
    where
        F: FnMut(LoopEvent<T>) -> ControlFlow,
    {
        let mut delivered = 0;
        for id in self.timers.process_expired() {
            delivered += 1;
            if handler(LoopEvent::Timer { id }) == ControlFlow::Exit {
                return delivered;
            }
        }
        while let Ok(event) = self.receiver.try_recv() {
            delivered += 1;
            if handler(event) == ControlFlow::Exit {
                break;
            }
        }
        delivered
    }

    fn dispatch_expired<F>(&self, handler: &mut F) -> ControlFlow
    where
        F: FnMut(LoopEvent<T>) -> ControlFlow,
    {
        for id in self.timers.process_expired() {
            if handler(LoopEvent::Timer { id }) == ControlFlow::Exit {
                return ControlFlow::Exit;
            }
        }
        ControlFlow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::timer::ManualClock;

    #[test]
    fn test_posted_events_arrive_in_order() {
        let event_loop = EventLoop::<u32>::new(Arc::new(SharedTimerManager::new()));
        let proxy = event_loop.proxy();
        proxy.send(1).unwrap();
        proxy.send(2).unwrap();
        proxy.quit().unwrap();

        let mut seen = Vec::new();
        event_loop
            .run(|event| {
                if let LoopEvent::User(n) = event {
                    seen.push(n);
                }
                ControlFlow::Continue
            })
            .unwrap();

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_timer_wakes_idle_loop() {
        let timers = Arc::new(SharedTimerManager::new());
        let event_loop = EventLoop::<()>::new(timers.clone());
        let id = timers.start_one_shot(Duration::from_millis(10));

        let mut fired = None;
        event_loop
            .run(|event| match event {
                LoopEvent::Timer { id } => {
                    fired = Some(id);
                    ControlFlow::Exit
                }
                _ => ControlFlow::Continue,
            })
            .unwrap();

        assert_eq!(fired, Some(id));
    }

    #[test]
    fn test_zero_duration_timer_delivered_once() {
        let clock = Arc::new(ManualClock::new());
        let timers = Arc::new(SharedTimerManager::with_clock(clock));
        let event_loop = EventLoop::<()>::new(timers.clone());
        let id = timers.start_one_shot(Duration::ZERO);

        let mut fired = Vec::new();
        let delivered = event_loop.pump(|event| {
            fired.push(event);
            ControlFlow::Continue
        });

        assert_eq!(delivered, 1);
        assert_eq!(fired, vec![LoopEvent::Timer { id }]);
        assert_eq!(event_loop.pump(|_| ControlFlow::Continue), 0);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_proxy_from_another_thread() {
        let event_loop = EventLoop::<String>::new(Arc::new(SharedTimerManager::new()));
        let proxy = event_loop.proxy();

        let worker = std::thread::spawn(move || {
            proxy.send("line".to_string()).unwrap();
        });

        let mut got = String::new();
        event_loop
            .run(|event| match event {
                LoopEvent::User(line) => {
                    got = line;
                    ControlFlow::Exit
                }
                _ => ControlFlow::Continue,
            })
            .unwrap();
        worker.join().unwrap();

        assert_eq!(got, "line");
    }

    #[test]
    fn test_pump_delivers_timers_before_posted_events() {
        let clock = Arc::new(ManualClock::new());
        let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
        let event_loop = EventLoop::<&'static str>::new(timers.clone());
        let id = timers.start_one_shot(Duration::from_millis(2000));
        event_loop.proxy().send("edit").unwrap();

        clock.advance(Duration::from_millis(2000));

        let mut order = Vec::new();
        let delivered = event_loop.pump(|event| {
            order.push(event);
            ControlFlow::Continue
        });

        assert_eq!(delivered, 2);
        assert_eq!(order, vec![LoopEvent::Timer { id }, LoopEvent::User("edit")]);
        assert_eq!(event_loop.pump(|_| ControlFlow::Continue), 0);
    }
}
