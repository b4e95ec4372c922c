//! Sync run orchestration
//!
//! One rusqlite transaction spans the Change Applier and the Sales
//! Ingestor: either both sets of effects commit or neither does. The
//! Snapshot Exporter deliberately runs OUTSIDE this transaction (after
//! commit, as an independent read) - see `export::export_snapshot`.

use crate::applier::apply_changes;
use crate::errors::{from_rusqlite, Result};
use crate::ingest::ingest_sales;
use balcao_core::{RunReport, SyncBatch};
use rusqlite::Connection;

/// Apply one batch to the store within a single transaction
///
/// On any store-level failure the transaction is rolled back as a whole and
/// the error propagates; per-record data problems never surface here - they
/// are counted in the returned report. `snapshot_version` is left unset;
/// the caller fills it in after export.
pub fn run_sync(conn: &mut Connection, batch: &SyncBatch) -> Result<RunReport> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let changes = apply_changes(&tx, &batch.changes)?;
    let sales = ingest_sales(&tx, &batch.sales)?;

    tx.commit().map_err(from_rusqlite)?;

    let report = RunReport {
        users_created: changes.users_created,
        products_updated: changes.products_updated,
        changes_malformed: changes.malformed,
        changes_unknown: changes.unknown,
        sales_inserted: sales.inserted,
        sales_duplicate: sales.duplicate,
        sales_malformed: sales.malformed,
        snapshot_version: None,
    };

    tracing::info!(
        users_created = report.users_created,
        products_updated = report.products_updated,
        sales_inserted = report.sales_inserted,
        skipped = report.skipped(),
        "Sync transaction committed"
    );

    Ok(report)
}
