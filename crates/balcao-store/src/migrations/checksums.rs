//! Migration checksums
//!
//! Each applied migration records a SHA256 of its SQL so later runs can
//! detect an edited migration file instead of silently diverging.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 of the migration SQL
pub fn sha256_hex(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}
