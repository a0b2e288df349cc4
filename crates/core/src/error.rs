//! Store error model.

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by inventory operations.
///
/// Keep this focused on the store's contract (bad arguments, missing items
/// or files, broken persisted data). Presentation concerns belong elsewhere.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A value was out of range (e.g. a negative removal quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested item or file was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Persisted inventory data could not be parsed.
    #[error("malformed inventory data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An I/O failure during save/load.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
