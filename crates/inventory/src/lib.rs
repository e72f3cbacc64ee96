//! Inventory domain module.
//!
//! Client-side shapes for the "Update Stock" form: the draft and the partial
//! update sent to the inventory service.

pub mod stock;

pub use stock::{StockDraft, UpdateStockRequest};
