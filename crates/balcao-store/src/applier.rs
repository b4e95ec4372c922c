//! Change Applier
//!
//! Applies a batch of change records inside the caller's transaction.
//! Application is idempotent: user creation is insert-if-absent and product
//! updates are last-write-wins overwrites, so re-running a batch leaves the
//! store unchanged. One malformed record never aborts the batch - it is
//! logged, counted and skipped.

use crate::errors::{persistence_error, Result};
use balcao_core::change::{parse_change, Change, ParsedChange, ProductPatch, StockAdjust};
use balcao_core::model::User;
use rusqlite::Transaction;
use serde_json::Value;

/// Counters produced by one applier pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeStats {
    /// User rows actually inserted
    pub users_created: u64,
    /// Product field updates that matched an existing row
    pub products_updated: u64,
    /// Recognized actions skipped for a bad details payload
    pub malformed: u64,
    /// Actions this build does not recognize (silent no-op by policy)
    pub unknown: u64,
}

/// Apply all change records within the given transaction
pub fn apply_changes(tx: &Transaction, changes: &[Value]) -> Result<ChangeStats> {
    let mut stats = ChangeStats::default();

    for raw in changes {
        match parse_change(raw) {
            ParsedChange::Recognized(Change::CreateUser(user)) => {
                stats.users_created += create_user(tx, &user)?;
            }
            ParsedChange::Recognized(Change::PairProduct(patch)) => {
                stats.products_updated += pair_product(tx, &patch)?;
            }
            ParsedChange::Recognized(Change::AdjustStock(adjust)) => {
                stats.products_updated += adjust_stock(tx, &adjust)?;
            }
            ParsedChange::Unknown { action } => {
                tracing::debug!(action, "Skipping unrecognized change action");
                stats.unknown += 1;
            }
            ParsedChange::Malformed { action, reason } => {
                tracing::warn!(action, reason, "Skipping malformed change record");
                stats.malformed += 1;
            }
        }
    }

    Ok(stats)
}

/// Insert a user row iff the username is not already taken
///
/// Returns 1 when a row was inserted, 0 when the username already existed.
fn create_user(tx: &Transaction, user: &User) -> Result<u64> {
    let inserted = tx
        .execute(
            "INSERT OR IGNORE INTO users (username, password, role) VALUES (?1, ?2, ?3)",
            rusqlite::params![user.username, user.password, user.role],
        )
        .map_err(|e| persistence_error("create_user", e))?;

    if inserted == 0 {
        tracing::debug!(username = %user.username, "User already exists, no-op");
    }

    Ok(inserted as u64)
}

/// Apply the optional barcode and stock updates of a pair_product change
///
/// Each present field is applied independently. An unmatched `cod` updates
/// zero rows, which is a no-op, not an error.
fn pair_product(tx: &Transaction, patch: &ProductPatch) -> Result<u64> {
    let mut updated = 0u64;

    if let Some(barcode) = &patch.new_barcode {
        updated += tx
            .execute(
                "UPDATE products SET barcode = ?1 WHERE cod = ?2",
                rusqlite::params![barcode, patch.cod],
            )
            .map_err(|e| persistence_error("pair_product", e))? as u64;
    }

    // Presence check, not truthiness: Some(0) is a real update to zero
    if let Some(stock) = patch.new_stock {
        updated += tx
            .execute(
                "UPDATE products SET stock = ?1 WHERE cod = ?2",
                rusqlite::params![stock, patch.cod],
            )
            .map_err(|e| persistence_error("pair_product", e))? as u64;
    }

    if updated == 0 {
        tracing::debug!(cod = %patch.cod, "pair_product matched no rows");
    }

    Ok(updated)
}

/// Overwrite the stock of the matching product row
fn adjust_stock(tx: &Transaction, adjust: &StockAdjust) -> Result<u64> {
    let updated = tx
        .execute(
            "UPDATE products SET stock = ?1 WHERE cod = ?2",
            rusqlite::params![adjust.new_stock, adjust.cod],
        )
        .map_err(|e| persistence_error("adjust_stock", e))?;

    Ok(updated as u64)
}
