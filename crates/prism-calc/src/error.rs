//! Error types for the terminal front end.
//!
//! The engine itself has none: every transition is total. Errors only
//! arise at the boundary where the binary touches the terminal.

use thiserror::Error;

/// Result type for the terminal front end.
pub type AppResult<T> = Result<T, AppError>;

/// Errors the binary can hit while driving the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal I/O failure
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log subscriber installation failed
    #[error("logging setup failed: {0}")]
    Logging(String),
}
