//! Scrollbar error types
//!
//! Only construction and configuration can fail. Runtime events never
//! return errors: unready geometry, empty extents, and late timer calls all
//! fall back to defined behavior.

use thiserror::Error;
use thumbtrack_core::TimerError;

/// Scrollbar setup errors
#[derive(Error, Debug)]
pub enum ScrollbarError {
    /// Failed to register a timer
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// Configuration value out of range
    #[error("Invalid scrollbar config: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be parsed
    #[error("Failed to parse scrollbar config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for scrollbar setup
pub type Result<T> = std::result::Result<T, ScrollbarError>;
