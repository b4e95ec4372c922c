//! Top-level sync payload
//!
//! The whole invocation input is one JSON document with two optional arrays.
//! Malformed JSON at this boundary is fatal for the run - unlike malformed
//! individual records, which are tolerated downstream. Elements are kept as
//! raw values here precisely so one bad record cannot fail the batch parse.

use crate::errors::{BalcaoError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Parsed top-level payload: raw change and sale elements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncBatch {
    /// Raw change records (`{"action": ..., "details": {...}}` each)
    #[serde(default)]
    pub changes: Vec<Value>,

    /// Raw sale records
    #[serde(default)]
    pub sales: Vec<Value>,
}

impl SyncBatch {
    /// Parse the invocation argument into a batch
    ///
    /// # Errors
    ///
    /// `ERR_INVALID_PAYLOAD` if the input is not a JSON object - this is the
    /// fatal invocation-level failure mode and happens before any store
    /// access.
    pub fn parse(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| BalcaoError::InvalidPayload {
            reason: e.to_string(),
        })
    }

    /// True when there is nothing to apply (export still runs)
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.sales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_arrays() {
        let batch = SyncBatch::parse(
            r#"{"changes":[{"action":"create_user","details":{}}],"sales":[{"timestamp":"t"}]}"#,
        )
        .unwrap();
        assert_eq!(batch.changes.len(), 1);
        assert_eq!(batch.sales.len(), 1);
    }

    #[test]
    fn test_arrays_are_optional() {
        let batch = SyncBatch::parse("{}").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = SyncBatch::parse("{not json").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_PAYLOAD");
    }

    #[test]
    fn test_bad_record_does_not_fail_batch_parse() {
        // A nonsense element inside a well-formed document parses fine here;
        // it becomes a per-record warning at apply time.
        let batch = SyncBatch::parse(r#"{"changes":[42]}"#).unwrap();
        assert_eq!(batch.changes.len(), 1);
    }
}
