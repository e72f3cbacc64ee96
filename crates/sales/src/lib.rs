//! Sales domain module.
//!
//! Client-side shapes for the "Place Order" form: the order draft with its item
//! lines, and the order request sent to the orders service.

pub mod order;

pub use order::{OrderDraft, OrderLine, OrderLineDraft, PlaceOrderRequest};
