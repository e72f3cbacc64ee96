use serde::{Deserialize, Serialize};

use storefront_core::{Sku, parse_int};

/// Editable state behind the "Update Stock" form.
///
/// `quantity` keeps the raw text typed into the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDraft {
    pub sku: String,
    pub quantity: String,
}

impl Default for StockDraft {
    fn default() -> Self {
        Self {
            sku: String::new(),
            quantity: "0".to_string(),
        }
    }
}

impl StockDraft {
    /// SKU the update is addressed to (the path key, not part of the body).
    pub fn sku(&self) -> Sku {
        Sku::new(self.sku.clone())
    }

    /// Build the partial update, coercing `quantity` to an integer.
    pub fn to_request(&self) -> UpdateStockRequest {
        UpdateStockRequest {
            quantity: parse_int(&self.quantity),
        }
    }
}

/// Body of `PATCH /inventory/{sku}`.
///
/// The quantity is absolute, not a delta. An uncoercible quantity is sent as
/// `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStockRequest {
    pub quantity: Option<i64>,
}
