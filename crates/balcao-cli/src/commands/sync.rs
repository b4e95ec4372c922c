//! Sync command
//!
//! Usage: balcao sync <PAYLOAD> [--db PATH] [--snapshot PATH]
//!
//! The payload is one JSON document with optional `changes` and `sales`
//! arrays. Change application and sales ingestion commit in a single
//! transaction; the snapshot export runs afterwards regardless of whether
//! anything changed. An export failure is reported separately - by then the
//! store mutation has already committed durably.

use balcao_core::SyncBatch;
use balcao_store::{export_snapshot, run_sync, SyncConfig};
use clap::Args;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// JSON payload with optional `changes` and `sales` arrays
    pub payload: String,

    /// Path of the SQLite store
    #[arg(long, default_value = "database.db")]
    pub db: String,

    /// Path of the JSON snapshot artifact
    #[arg(long, default_value = "dados_offline.json")]
    pub snapshot: String,
}

/// Execute the sync command
pub fn execute(args: SyncArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Malformed top-level JSON is fatal before the store is touched
    let batch = SyncBatch::parse(&args.payload)?;
    let config = SyncConfig::new(&args.db, &args.snapshot);

    let mut conn = balcao_store::db::open(&config.store_path)?;
    balcao_store::db::configure(&conn)?;

    let mut report = run_sync(&mut conn, &batch)?;

    // The transaction is committed; export is an independent read from here
    match export_snapshot(&conn, &config.snapshot_path) {
        Ok(version) => report.snapshot_version = Some(version),
        Err(e) => {
            println!("{}", report);
            return Err(format!("store updated, but snapshot export failed: {}", e).into());
        }
    }

    println!("{}", report);
    Ok(())
}
