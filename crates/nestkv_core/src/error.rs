//! Error types for NestKV core.

use thiserror::Error;

/// Result type for store and namespace operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store and namespace operations.
///
/// Errors from the engine and codec layers propagate unchanged; this
/// layer adds no retries, context wrapping, or logging of its own.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry exists at the requested key.
    #[error("key not found")]
    NotFound,

    /// The underlying engine failed.
    #[error("engine error: {0}")]
    Engine(#[from] nestkv_engine::EngineError),

    /// Encoding or decoding a typed value failed.
    #[error("codec error: {0}")]
    Codec(#[from] nestkv_codec::CodecError),
}

impl StoreError {
    /// Returns `true` if this is the not-found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
