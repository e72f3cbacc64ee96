use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::{Sku, parse_float};

/// Product identifier assigned by the product service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product read model (matches the product service's list response shape).
///
/// Non-authoritative: the console only ever holds the last list it fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub sku: Sku,
    pub name: String,
    pub price: f64,
}

/// Renders one catalog line: `Widget (SKU: A1, Price: $9.5)`.
impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (SKU: {}, Price: ${})", self.name, self.sku, self.price)
    }
}

/// Editable state behind the "Create Product" form.
///
/// `price` keeps the raw text typed into the field; it is only coerced when the
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub price: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            price: "0".to_string(),
        }
    }
}

impl ProductDraft {
    /// Build the creation request, coercing `price` to a float.
    pub fn to_request(&self) -> CreateProductRequest {
        CreateProductRequest {
            sku: Sku::new(self.sku.clone()),
            name: self.name.clone(),
            price: parse_float(&self.price),
        }
    }
}

/// Body of `POST /products`.
///
/// A non-finite `price` serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub sku: Sku,
    pub name: String,
    pub price: f64,
}
