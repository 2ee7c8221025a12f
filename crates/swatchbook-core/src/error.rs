//! Error types for swatchbook core systems.

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by the timer and event loop systems.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The timer ID is invalid or has already been removed.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,

    /// The event loop has shut down and can no longer receive events.
    #[error("The event loop has already exited")]
    EventLoopClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CoreError::InvalidTimerId.to_string(), "Invalid or expired timer ID");
        assert_eq!(
            CoreError::EventLoopClosed.to_string(),
            "The event loop has already exited"
        );
    }
}
