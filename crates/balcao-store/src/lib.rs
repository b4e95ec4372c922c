//! Balcão Store - Persistence layer for the offline sync utility
//!
//! Provides:
//! - SQLite connection management and embedded schema migrations
//! - The Change Applier (idempotent user/product mutations)
//! - The Sales Ingestor (deduplicated append-only log)
//! - The Snapshot Exporter (versioned full-store JSON, written atomically)
//! - The single-transaction sync run orchestrator

pub mod applier;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod migrations;
pub mod run;

// Re-export key types
pub use config::SyncConfig;
pub use errors::Result;
pub use export::export_snapshot;
pub use run::run_sync;
