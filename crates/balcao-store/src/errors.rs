//! Error handling for balcao-store
//!
//! Wraps balcao-core BalcaoError with store-specific helpers

use balcao_core::errors::BalcaoError;

/// Result type alias using BalcaoError
pub type Result<T> = balcao_core::errors::Result<T>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> BalcaoError {
    BalcaoError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Create a database error with operation context
pub fn persistence_error(op: &str, err: rusqlite::Error) -> BalcaoError {
    BalcaoError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> BalcaoError {
    BalcaoError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a serialization error
pub fn serialization_error(op: &str, err: serde_json::Error) -> BalcaoError {
    BalcaoError::Serialization {
        op: op.to_string(),
        message: err.to_string(),
    }
}
