//! Events dispatched through the swatchbook event loop.

use crate::timer::TimerId;

/// An event delivered to the event loop handler.
///
/// `T` is the application's own event type, posted through an
/// [`EventLoopProxy`](crate::EventLoopProxy).
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent<T> {
    /// A timer has fired.
    Timer {
        /// The timer that fired.
        id: TimerId,
    },

    /// An application event posted to the loop.
    User(T),

    /// Request to quit the loop.
    Quit,
}

impl<T> LoopEvent<T> {
    /// Whether this is a quit request.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
