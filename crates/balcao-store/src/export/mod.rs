//! Snapshot Exporter
//!
//! Serializes the entire store into one versioned JSON document and writes
//! it atomically over the previous snapshot. The exporter is a pure read:
//! it never mutates the store, and it runs after the sync transaction has
//! committed, so an export failure cannot undo applied changes.
//!
//! The object field names (`version`, `products`, `users`, `vendas_log`)
//! are the external contract of the offline consumers.

mod atomic;
mod version;

pub use atomic::atomic_write;
pub use version::{next_version, read_prior_version, BASELINE_VERSION};

use crate::errors::{from_rusqlite, serialization_error, Result};
use balcao_core::model::{Product, SaleRecord, User};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// The full snapshot document, regenerated wholesale each run
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Monotone integer version marker
    pub version: i64,
    /// All product rows, ordered by cod
    pub products: Vec<Product>,
    /// All user rows, ordered by username
    pub users: Vec<User>,
    /// All sales-log rows, in insertion order
    pub vendas_log: Vec<SaleRecord>,
}

/// Export the current store state to `snapshot_path`
///
/// Reads the prior snapshot only to recover its version marker; everything
/// else is regenerated from the store. A tracked table that does not exist
/// yet (schema not provisioned) contributes an empty list instead of
/// failing. Returns the version marker that was written.
pub fn export_snapshot(conn: &Connection, snapshot_path: &Path) -> Result<i64> {
    let prior = read_prior_version(snapshot_path);
    let version = next_version(prior);

    let snapshot = Snapshot {
        version,
        products: list_products(conn)?,
        users: list_users(conn)?,
        vendas_log: list_sales(conn)?,
    };

    let json =
        serde_json::to_vec_pretty(&snapshot).map_err(|e| serialization_error("export_snapshot", e))?;
    atomic_write(snapshot_path, &json)?;

    tracing::info!(
        version,
        products = snapshot.products.len(),
        users = snapshot.users.len(),
        vendas = snapshot.vendas_log.len(),
        "Snapshot exported"
    );

    Ok(version)
}

/// True when the error is SQLite telling us a tracked table does not exist
fn is_missing_table(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("no such table")
    )
}

/// List all product rows, or an empty list when the table is absent
fn list_products(conn: &Connection) -> Result<Vec<Product>> {
    let mut stmt = match conn.prepare("SELECT cod, barcode, stock FROM products ORDER BY cod") {
        Ok(stmt) => stmt,
        Err(e) if is_missing_table(&e) => return Ok(Vec::new()),
        Err(e) => return Err(from_rusqlite(e)),
    };

    let products = stmt
        .query_map([], |row| {
            Ok(Product {
                cod: row.get(0)?,
                barcode: row.get(1)?,
                stock: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(products)
}

/// List all user rows, or an empty list when the table is absent
fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt =
        match conn.prepare("SELECT username, password, role FROM users ORDER BY username") {
            Ok(stmt) => stmt,
            Err(e) if is_missing_table(&e) => return Ok(Vec::new()),
            Err(e) => return Err(from_rusqlite(e)),
        };

    let users = stmt
        .query_map([], |row| {
            Ok(User {
                username: row.get(0)?,
                password: row.get(1)?,
                role: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(users)
}

/// List all sales-log rows, or an empty list when the table is absent
fn list_sales(conn: &Connection) -> Result<Vec<SaleRecord>> {
    let mut stmt = match conn.prepare(
        "SELECT timestamp, vendedor, produtos, formas_pagamento, valores_pagos, desconto, valor_total
         FROM vendas_log ORDER BY rowid",
    ) {
        Ok(stmt) => stmt,
        Err(e) if is_missing_table(&e) => return Ok(Vec::new()),
        Err(e) => return Err(from_rusqlite(e)),
    };

    let sales = stmt
        .query_map([], |row| {
            Ok(SaleRecord {
                timestamp: row.get(0)?,
                vendedor: row.get(1)?,
                produtos: row.get(2)?,
                formas_pagamento: row.get(3)?,
                valores_pagos: row.get(4)?,
                desconto: row.get(5)?,
                valor_total: row.get(6)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(sales)
}
