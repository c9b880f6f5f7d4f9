//! Core error types

use thiserror::Error;

/// Errors raised by the core library.
///
/// The break computation itself is total; only configuration can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
