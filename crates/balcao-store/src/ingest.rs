//! Sales Ingestor
//!
//! Appends sale records to vendas_log, deduplicating on the natural key
//! `(timestamp, vendedor)`. The existing keys are loaded in ONE bulk read
//! up front instead of one probe query per candidate; the same set then
//! catches duplicates inside the batch itself (first-seen wins).

use crate::errors::{persistence_error, Result};
use balcao_core::model::SaleRecord;
use rusqlite::Transaction;
use serde_json::Value;
use std::collections::HashSet;

/// Counters produced by one ingest pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Records newly appended to the log
    pub inserted: u64,
    /// Records dropped because their key already existed (in the store or
    /// earlier in this batch)
    pub duplicate: u64,
    /// Records skipped as malformed (missing timestamp or vendedor)
    pub malformed: u64,
}

/// Ingest all sale records within the given transaction
pub fn ingest_sales(tx: &Transaction, sales: &[Value]) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    if sales.is_empty() {
        return Ok(stats);
    }

    // Bulk-load every key already in the log; this set doubles as the
    // in-batch seen-set so re-running a batch inserts nothing new.
    let mut seen = load_existing_keys(tx)?;

    for raw in sales {
        let sale: SaleRecord = match serde_json::from_value(raw.clone()) {
            Ok(sale) => sale,
            Err(e) => {
                tracing::warn!(reason = %e, "Skipping malformed sale record");
                stats.malformed += 1;
                continue;
            }
        };

        if seen.contains(&sale.key()) {
            tracing::debug!(
                timestamp = %sale.timestamp,
                vendedor = %sale.vendedor,
                "Duplicate sale record, skipping"
            );
            stats.duplicate += 1;
            continue;
        }

        insert_sale(tx, &sale)?;
        seen.insert(sale.key());
        stats.inserted += 1;
    }

    Ok(stats)
}

/// Load the set of (timestamp, vendedor) keys already present in the log
fn load_existing_keys(tx: &Transaction) -> Result<HashSet<(String, String)>> {
    let mut stmt = tx
        .prepare("SELECT timestamp, vendedor FROM vendas_log")
        .map_err(|e| persistence_error("load_sale_keys", e))?;

    let keys = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|e| persistence_error("load_sale_keys", e))?
        .collect::<std::result::Result<HashSet<_>, _>>()
        .map_err(|e| persistence_error("load_sale_keys", e))?;

    Ok(keys)
}

/// Append one sale record to the log
fn insert_sale(tx: &Transaction, sale: &SaleRecord) -> Result<()> {
    tx.execute(
        "INSERT INTO vendas_log
            (timestamp, vendedor, produtos, formas_pagamento, valores_pagos, desconto, valor_total)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            sale.timestamp,
            sale.vendedor,
            sale.produtos,
            sale.formas_pagamento,
            sale.valores_pagos,
            sale.desconto,
            sale.valor_total,
        ],
    )
    .map_err(|e| persistence_error("insert_sale", e))?;

    Ok(())
}
