//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Embedded SQL migrations
//!
//! The sync run itself never provisions schema; this module backs the
//! `migrate` CLI path that plays the external-collaborator role.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
