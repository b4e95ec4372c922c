//! Version marker recovery and advancement
//!
//! One fixed scheme: a monotone integer counter stored as a JSON number.
//! Anything that prevents reading the prior marker (missing file, corrupt
//! JSON, wrong type) falls back to the baseline - recovery is never fatal,
//! because the snapshot is a disposable projection of the store.

use serde_json::Value;
use std::path::Path;

/// Marker used when no prior snapshot can be read. The first export
/// therefore writes version 1.
pub const BASELINE_VERSION: i64 = 0;

/// Recover the version marker from the previous snapshot file
pub fn read_prior_version(snapshot_path: &Path) -> i64 {
    let content = match std::fs::read_to_string(snapshot_path) {
        Ok(content) => content,
        Err(_) => return BASELINE_VERSION,
    };

    let doc: Value = match serde_json::from_str(&content) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(
                path = %snapshot_path.display(),
                reason = %e,
                "Prior snapshot unparseable, using baseline version"
            );
            return BASELINE_VERSION;
        }
    };

    match doc.get("version").and_then(Value::as_i64) {
        Some(version) => version,
        None => {
            tracing::warn!(
                path = %snapshot_path.display(),
                "Prior snapshot has no integer version, using baseline"
            );
            BASELINE_VERSION
        }
    }
}

/// Compute the next marker from the prior one
pub fn next_version(prior: i64) -> i64 {
    prior.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_baseline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert_eq!(read_prior_version(&path), BASELINE_VERSION);
    }

    #[test]
    fn test_corrupt_file_is_baseline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, "{ not json at all").unwrap();
        assert_eq!(read_prior_version(&path), BASELINE_VERSION);
    }

    #[test]
    fn test_non_integer_version_is_baseline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, r#"{"version": "2.1.3"}"#).unwrap();
        assert_eq!(read_prior_version(&path), BASELINE_VERSION);
    }

    #[test]
    fn test_prior_version_recovered() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, r#"{"version": 7, "products": []}"#).unwrap();
        assert_eq!(read_prior_version(&path), 7);
        assert_eq!(next_version(read_prior_version(&path)), 8);
    }

    #[test]
    fn test_next_version_saturates() {
        assert_eq!(next_version(i64::MAX), i64::MAX);
    }
}
