//! Products domain module.
//!
//! The catalog itself lives in the remote product service. This crate holds the
//! client-side shapes: the listed read model, the editable draft behind the
//! "Create Product" form, and the creation request built from it.

pub mod product;

pub use product::{CreateProductRequest, Product, ProductDraft, ProductId};
