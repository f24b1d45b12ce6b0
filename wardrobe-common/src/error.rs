//! Common error types for the wardrobe tools

use thiserror::Error;

/// Common result type for wardrobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the wardrobe crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeline export could not be decoded (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
