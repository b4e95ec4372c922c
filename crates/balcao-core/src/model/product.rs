use serde::{Deserialize, Serialize};

/// Product - a catalogue row keyed by its stable product code
///
/// Products are never created by the sync utility, only updated. A change
/// referencing a `cod` that is not in the store updates zero rows and is
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product code (natural key)
    pub cod: String,

    /// Scannable barcode; absent until the product is paired
    pub barcode: Option<String>,

    /// Stock quantity. Expected >= 0 but not validated here.
    pub stock: i64,
}

impl Product {
    /// Create a new Product with no barcode
    pub fn new(cod: String, stock: i64) -> Self {
        Self {
            cod,
            barcode: None,
            stock,
        }
    }
}
