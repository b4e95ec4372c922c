//! Export command
//!
//! Usage: balcao export [--db PATH] [--snapshot PATH]
//!
//! Regenerates the snapshot from the current store state without applying
//! any batch. Useful after restoring a store file or when a previous export
//! failed.

use balcao_store::{export_snapshot, SyncConfig};
use clap::Args;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path of the SQLite store
    #[arg(long, default_value = "database.db")]
    pub db: String,

    /// Path of the JSON snapshot artifact
    #[arg(long, default_value = "dados_offline.json")]
    pub snapshot: String,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SyncConfig::new(&args.db, &args.snapshot);

    let conn = balcao_store::db::open(&config.store_path)?;
    let version = export_snapshot(&conn, &config.snapshot_path)?;

    println!(
        "Snapshot written to {} (version {})",
        config.snapshot_path.display(),
        version
    );
    Ok(())
}
