//! Timer system for swatchbook.
//!
//! Provides one-shot timers. Time is read from a [`Clock`], so
//! the event loop runs on [`SystemClock`] while tests drive a [`ManualClock`]
//! forward explicitly.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{CoreError, Result};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use swatchbook_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(2000));
/// assert_eq!(clock.now() - start, Duration::from_millis(2000));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug)]
struct TimerData {
    fire_time: Instant,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for one event loop.
pub struct TimerManager {
    clock: Arc<dyn Clock>,
    /// All registered timers. A stopped timer is removed here; its queue
    /// entry is discarded lazily.
    timers: SlotMap<TimerId, TimerData>,
    /// Pending fires, earliest first.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a timer manager on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a timer manager that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        let fire_time = self.clock.now() + duration;
        let id = self.timers.insert(TimerData { fire_time });
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(target: targets::TIMER, ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns an error if the timer already fired or was stopped.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
                Ok(())
            }
            None => Err(CoreError::InvalidTimerId),
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.discard_stale();
        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Pop queue entries whose timer was stopped.
    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            let live = self
                .timers
                .get(entry.id)
                .is_some_and(|t| t.fire_time == entry.fire_time);
            if live {
                break;
            }
            self.queue.pop();
        }
    }

    /// Collect every timer whose deadline has passed.
    ///
    /// Fired timers are removed, so each fires at most once. IDs are
    /// returned in firing order.
    #[tracing::instrument(skip(self), target = "swatchbook_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let live = self
                .timers
                .get(entry.id)
                .is_some_and(|t| t.fire_time == entry.fire_time);
            if !live {
                continue;
            }

            self.timers.remove(entry.id);
            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            fired.push(entry.id);
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerManager")
            .field("active", &self.timers.len())
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

/// A thread-safe wrapper around [`TimerManager`].
///
/// Widgets and the event loop share one of these behind an `Arc`.
#[derive(Debug, Default)]
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a shared timer manager on the system clock.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// Create a shared timer manager that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(TimerManager::with_clock(clock)),
        }
    }

    /// See [`TimerManager::start_one_shot`].
    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    /// See [`TimerManager::stop`].
    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    /// See [`TimerManager::is_active`].
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// See [`TimerManager::time_until_next`].
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// See [`TimerManager::process_expired`].
    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    /// See [`TimerManager::active_count`].
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

static_assertions::assert_impl_all!(SharedTimerManager: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> (Arc<ManualClock>, TimerManager) {
        let clock = Arc::new(ManualClock::new());
        let manager = TimerManager::with_clock(clock.clone());
        (clock, manager)
    }

    #[test]
    fn test_one_shot_fires_once_at_deadline() {
        let (clock, mut timers) = manual();
        let id = timers.start_one_shot(Duration::from_millis(2000));

        clock.advance(Duration::from_millis(1999));
        assert!(timers.process_expired().is_empty());
        assert!(timers.is_active(id));

        clock.advance(Duration::from_millis(1));
        assert_eq!(timers.process_expired(), vec![id]);
        assert!(!timers.is_active(id));

        clock.advance(Duration::from_millis(5000));
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let (clock, mut timers) = manual();
        let id = timers.start_one_shot(Duration::from_millis(100));

        assert!(timers.stop(id).is_ok());
        assert_eq!(timers.stop(id), Err(CoreError::InvalidTimerId));

        clock.advance(Duration::from_millis(200));
        assert!(timers.process_expired().is_empty());
        assert_eq!(timers.time_until_next(), None);
    }

    #[test]
    fn test_zero_duration_fires_once_without_advancing() {
        let (_clock, mut timers) = manual();
        let id = timers.start_one_shot(Duration::ZERO);

        assert_eq!(timers.time_until_next(), Some(Duration::ZERO));
        assert_eq!(timers.process_expired(), vec![id]);
        assert!(timers.process_expired().is_empty());
        assert_eq!(timers.time_until_next(), None);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_restarted_timer_keeps_only_latest_deadline() {
        let (clock, mut timers) = manual();
        let first = timers.start_one_shot(Duration::from_millis(2000));
        clock.advance(Duration::from_millis(1500));
        timers.stop(first).unwrap();
        let second = timers.start_one_shot(Duration::from_millis(2000));

        clock.advance(Duration::from_millis(500));
        assert!(timers.process_expired().is_empty());

        clock.advance(Duration::from_millis(1500));
        assert_eq!(timers.process_expired(), vec![second]);
    }

    #[test]
    fn test_time_until_next_skips_stopped() {
        let (clock, mut timers) = manual();
        let early = timers.start_one_shot(Duration::from_millis(50));
        let _late = timers.start_one_shot(Duration::from_millis(300));

        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(50)));
        timers.stop(early).unwrap();
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(300)));

        clock.advance(Duration::from_millis(400));
        assert_eq!(timers.time_until_next(), Some(Duration::ZERO));
    }

    #[test]
    fn test_fire_order_follows_deadlines() {
        let (clock, mut timers) = manual();
        let second = timers.start_one_shot(Duration::from_millis(20));
        let first = timers.start_one_shot(Duration::from_millis(10));

        clock.advance(Duration::from_millis(25));
        assert_eq!(timers.process_expired(), vec![first, second]);
    }

    #[test]
    fn test_shared_manager_delegates() {
        let clock = Arc::new(ManualClock::new());
        let timers = SharedTimerManager::with_clock(clock.clone());
        let id = timers.start_one_shot(Duration::from_secs(2));
        assert_eq!(timers.active_count(), 1);

        clock.advance(Duration::from_secs(2));
        assert_eq!(timers.process_expired(), vec![id]);
        assert_eq!(timers.active_count(), 0);
    }
}
