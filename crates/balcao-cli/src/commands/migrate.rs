//! Migrate command
//!
//! Usage: balcao migrate [--db PATH]
//!
//! Provisions the three tracked tables. The sync run itself never creates
//! schema; this subcommand plays the provisioning collaborator's role for
//! local and test setups.

use clap::Args;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Path of the SQLite store
    #[arg(long, default_value = "database.db")]
    pub db: String,
}

/// Execute the migrate command
pub fn execute(args: MigrateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = balcao_store::db::open(&args.db)?;
    balcao_store::migrations::apply_migrations(&mut conn)?;

    println!("Schema up to date at {}", args.db);
    Ok(())
}
