//! Timer error types

use thiserror::Error;

/// Errors raised when registering timers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A repeating timer needs a non-zero interval
    #[error("repeating timer interval must be greater than zero")]
    ZeroInterval,
}

/// Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
