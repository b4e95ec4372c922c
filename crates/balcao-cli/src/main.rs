//! Balcão CLI
//!
//! Command-line interface for the offline sync utility

use balcao_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "balcao")]
#[command(about = "Balcão - apply change batches and export the offline snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply a JSON batch to the store, then export the snapshot
    Sync(commands::sync::SyncArgs),
    /// Re-export the snapshot without applying anything
    Export(commands::export::ExportArgs),
    /// Provision or upgrade the store schema
    Migrate(commands::migrate::MigrateArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Migrate(args) => commands::migrate::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
