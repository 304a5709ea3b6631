//! Error types for engine operations.

use std::io;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations.
///
/// Point lookups of absent keys are not errors; they surface as
/// `Ok(None)` from [`crate::ReadTxn::get`]. Every variant here is a
/// genuine engine failure.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The engine's on-disk or in-memory state is corrupted.
    #[error("engine corrupted: {0}")]
    Corrupted(String),

    /// A write transaction conflicted with a concurrent commit.
    #[error("transaction conflict: {0}")]
    Conflict(String),

    /// The engine is closed.
    #[error("engine is closed")]
    Closed,
}
