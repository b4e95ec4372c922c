//! Atomic write primitives
//!
//! Uses temp→rename so an interrupted export never leaves a half-written
//! snapshot behind - consumers only ever see the old file or the new file.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically replace the file at `target_path` with `content`
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
        }
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_snapshot_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("replace_snapshot", e))?;

    Ok(())
}
