//! Change records
//!
//! A change record arrives as `{"action": <kind>, "details": {...}}`. The
//! kinds this system understands are parsed into the [`Change`] sum type so
//! application code dispatches by exhaustive match instead of comparing
//! strings. Unrecognized kinds are a deliberate no-op (forward
//! compatibility): newer producers may emit actions an older consumer does
//! not know yet.

use crate::model::User;
use serde::Deserialize;
use serde_json::Value;

/// A recognized change, tagged by action kind with its validated payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", content = "details")]
pub enum Change {
    /// Insert a user row iff no row with that username exists
    #[serde(rename = "create_user")]
    CreateUser(User),

    /// Update barcode and/or stock of an existing product.
    /// `edit_barcode` is the historical alias for the same operation.
    #[serde(rename = "pair_product", alias = "edit_barcode")]
    PairProduct(ProductPatch),

    /// Overwrite the stock of an existing product
    #[serde(rename = "adjust_stock")]
    AdjustStock(StockAdjust),
}

/// Payload of `pair_product` / `edit_barcode`
///
/// Both fields are optional and independently applied. Presence is what
/// matters, not truthiness: `"newStock": 0` is a real update to zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPatch {
    /// Product code of the row to update
    pub cod: String,

    /// New barcode, if this change pairs one
    #[serde(rename = "newBarcode", default)]
    pub new_barcode: Option<String>,

    /// New stock quantity, if this change sets one
    #[serde(rename = "newStock", default)]
    pub new_stock: Option<i64>,
}

/// Payload of `adjust_stock`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockAdjust {
    /// Product code of the row to update
    pub cod: String,

    /// New stock quantity (last-write-wins overwrite, not an increment)
    #[serde(rename = "newStock")]
    pub new_stock: i64,
}

/// Outcome of parsing one raw change element
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedChange {
    /// A recognized action with a valid payload
    Recognized(Change),
    /// An action kind this build does not know - skipped silently by policy
    Unknown { action: String },
    /// A recognized action whose details payload is missing or mistyped
    Malformed { action: String, reason: String },
}

const KNOWN_ACTIONS: &[&str] = &["create_user", "pair_product", "edit_barcode", "adjust_stock"];

/// Parse one raw change element into a [`ParsedChange`]
///
/// The action tag is inspected first so that unknown kinds never surface as
/// deserialization errors: only a recognized action with a bad payload is
/// reported as malformed.
pub fn parse_change(raw: &Value) -> ParsedChange {
    let action = match raw.get("action").and_then(Value::as_str) {
        Some(a) => a.to_string(),
        None => {
            return ParsedChange::Malformed {
                action: String::new(),
                reason: "missing 'action' field".to_string(),
            }
        }
    };

    if !KNOWN_ACTIONS.contains(&action.as_str()) {
        return ParsedChange::Unknown { action };
    }

    match serde_json::from_value::<Change>(raw.clone()) {
        Ok(change) => ParsedChange::Recognized(change),
        Err(e) => ParsedChange::Malformed {
            action,
            reason: e.to_string(),
        },
    }
}
