// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Nothing in this core is fatal: invalid input is reported back to the
//! caller with the form still open, and storage failures leave the
//! in-memory collection authoritative for the session.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required form field failed to parse, was non-finite, or violated
    /// a positivity constraint. The message is suitable for showing to
    /// the user directly.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The persistent slot could not be read or written. Non-fatal; the
    /// in-memory state remains authoritative.
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, AppError>;
