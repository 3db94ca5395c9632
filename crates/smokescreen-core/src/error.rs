//! Error type shared by every smokescreen crate.

use thiserror::Error;

/// Errors produced while configuring or rendering the backdrop.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The drawing surface rejected an operation (e.g. a canvas gradient).
    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error("invalid counter target: {0:?}")]
    InvalidCount(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
