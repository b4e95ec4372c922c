//! Run configuration
//!
//! Paths are passed in explicitly rather than read from module-level
//! constants, so tests and callers can point a run anywhere.

use std::path::PathBuf;

/// Locations used by one sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Path of the SQLite store file
    pub store_path: PathBuf,

    /// Path of the JSON snapshot artifact
    pub snapshot_path: PathBuf,
}

impl SyncConfig {
    /// Create a configuration from the two locations
    pub fn new(store_path: impl Into<PathBuf>, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            snapshot_path: snapshot_path.into(),
        }
    }
}
