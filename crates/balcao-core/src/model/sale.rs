use serde::{Deserialize, Serialize};

/// SaleRecord - one append-only sales-log entry
///
/// The `(timestamp, vendedor)` pair is the natural key: it is assumed unique
/// per real-world sale and is the deduplication key for ingestion. Records
/// are never updated or deleted once ingested.
///
/// The payload columns (`produtos`, `formas_pagamento`, `valores_pagos`) are
/// opaque serialized text produced by the caller; they pass through unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Caller-defined timestamp string. Required: a record without it cannot
    /// be keyed and is skipped with a warning.
    pub timestamp: String,

    /// Seller identifier (second half of the natural key)
    pub vendedor: String,

    /// Opaque serialized product list
    #[serde(default)]
    pub produtos: Option<String>,

    /// Opaque serialized payment methods
    #[serde(default)]
    pub formas_pagamento: Option<String>,

    /// Opaque serialized amounts paid
    #[serde(default)]
    pub valores_pagos: Option<String>,

    /// Discount applied; defaults to 0 when absent from the payload
    #[serde(default)]
    pub desconto: f64,

    /// Total sale value. Incoming payloads may use the short key `total`.
    #[serde(alias = "total")]
    pub valor_total: f64,
}

impl SaleRecord {
    /// The deduplication key for this record
    pub fn key(&self) -> (String, String) {
        (self.timestamp.clone(), self.vendedor.clone())
    }
}
