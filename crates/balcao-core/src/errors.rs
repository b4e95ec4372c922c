//! Error facility for balcao
//!
//! One enum covers the whole taxonomy: fatal invocation errors, store-level
//! failures, and export-side I/O. Per-record data errors are deliberately NOT
//! represented here - they are warnings counted in the RunReport, never Err.

use thiserror::Error;

/// Result type alias using BalcaoError
pub type Result<T> = std::result::Result<T, BalcaoError>;

/// Canonical error type for the sync utility
#[derive(Debug, Error)]
pub enum BalcaoError {
    /// Top-level input payload is not valid JSON or not an object
    #[error("Invalid input payload: {reason}")]
    InvalidPayload { reason: String },

    /// SQLite-level failure (constraint violation, connectivity, bad SQL)
    #[error("Database error in '{op}': {message}")]
    Persistence { op: String, message: String },

    /// Filesystem failure while reading or writing the snapshot
    #[error("I/O error in '{op}': {message}")]
    Io { op: String, message: String },

    /// JSON (de)serialization failure outside the tolerant per-record paths
    #[error("Serialization error in '{op}': {message}")]
    Serialization { op: String, message: String },

    /// Invariant breakage that indicates a bug, not bad input
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BalcaoError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the operator-facing contract: scripts may match on
    /// them, so they never change even if messages do.
    pub fn code(&self) -> &'static str {
        match self {
            BalcaoError::InvalidPayload { .. } => "ERR_INVALID_PAYLOAD",
            BalcaoError::Persistence { .. } => "ERR_PERSISTENCE",
            BalcaoError::Io { .. } => "ERR_IO",
            BalcaoError::Serialization { .. } => "ERR_SERIALIZATION",
            BalcaoError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}
