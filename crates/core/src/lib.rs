//! `storefront-core`: primitives shared by the storefront domain crates.
//!
//! This crate contains **pure** value types and input handling (no IO, no HTTP).

pub mod coerce;
pub mod sku;

pub use coerce::{parse_float, parse_int};
pub use sku::Sku;
