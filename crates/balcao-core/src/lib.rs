//! Balcão Core - Domain model for the offline sync utility
//!
//! This crate provides the data structures shared by the store and CLI layers:
//! - User, Product and SaleRecord models matching the relational schema
//! - The Change sum type with tolerant per-record parsing
//! - The top-level SyncBatch payload parser
//! - RunReport counters surfaced to operators after each run
//! - Error facility and logging initialization

pub mod batch;
pub mod change;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use batch::SyncBatch;
pub use change::{parse_change, Change, ParsedChange};
pub use errors::{BalcaoError, Result};
pub use model::{Product, SaleRecord, User};
pub use report::RunReport;
