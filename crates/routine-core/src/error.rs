//! Error types for routine-core

use thiserror::Error;

/// Result type alias using routine-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in routine-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Desktop notification error
    #[error("Notification error: {0}")]
    Notification(String),
}
