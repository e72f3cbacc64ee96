use serde::{Deserialize, Serialize};

use storefront_core::{Sku, parse_float, parse_int};

/// One editable item line of the "Place Order" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineDraft {
    pub sku: String,
    pub quantity: String,
}

impl Default for OrderLineDraft {
    fn default() -> Self {
        Self {
            sku: String::new(),
            quantity: "0".to_string(),
        }
    }
}

impl OrderLineDraft {
    pub fn to_line(&self) -> OrderLine {
        OrderLine {
            sku: Sku::new(self.sku.clone()),
            quantity: parse_int(&self.quantity),
        }
    }
}

/// Editable state behind the "Place Order" form.
///
/// The form edits a single line, but the draft (and the wire format) carry an
/// ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Vec<OrderLineDraft>,
    pub total: String,
}

impl Default for OrderDraft {
    /// One empty item line and a zero total.
    fn default() -> Self {
        Self {
            items: vec![OrderLineDraft::default()],
            total: "0".to_string(),
        }
    }
}

impl OrderDraft {
    /// The line the form edits, created on demand if the draft has none.
    pub fn first_line_mut(&mut self) -> &mut OrderLineDraft {
        if self.items.is_empty() {
            self.items.push(OrderLineDraft::default());
        }
        &mut self.items[0]
    }

    /// Build the order request: quantities coerced to integers, total to a float.
    pub fn to_request(&self) -> PlaceOrderRequest {
        PlaceOrderRequest {
            items: self.items.iter().map(OrderLineDraft::to_line).collect(),
            total: parse_float(&self.total),
        }
    }
}

/// An order item as sent to the orders service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: Sku,
    pub quantity: Option<i64>,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderLine>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_draft_has_one_blank_line() {
        let draft = OrderDraft::default();
        assert_eq!(draft.items, vec![OrderLineDraft::default()]);
        assert_eq!(draft.items[0].sku, "");
        assert_eq!(draft.items[0].quantity, "0");
        assert_eq!(draft.total, "0");
    }

    #[test]
    fn to_request_coerces_quantity_and_total() {
        let mut draft = OrderDraft::default();
        draft.first_line_mut().sku = "A1".to_string();
        draft.first_line_mut().quantity = "2".to_string();
        draft.total = "19.99".to_string();

        let body = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            body,
            json!({ "items": [{ "sku": "A1", "quantity": 2 }], "total": 19.99 })
        );
    }

    #[test]
    fn to_request_keeps_line_order() {
        let draft = OrderDraft {
            items: vec![
                OrderLineDraft {
                    sku: "B2".to_string(),
                    quantity: "1".to_string(),
                },
                OrderLineDraft {
                    sku: "A1".to_string(),
                    quantity: "4".to_string(),
                },
            ],
            total: "12".to_string(),
        };

        let req = draft.to_request();
        let skus: Vec<&str> = req.items.iter().map(|l| l.sku.as_str()).collect();
        assert_eq!(skus, vec!["B2", "A1"]);
        assert_eq!(req.items[1].quantity, Some(4));
        assert_eq!(req.total, 12.0);
    }

    #[test]
    fn first_line_mut_recreates_missing_line() {
        let mut draft = OrderDraft {
            items: Vec::new(),
            total: "0".to_string(),
        };
        draft.first_line_mut().sku = "C3".to_string();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].sku, "C3");
    }

    #[test]
    fn unparsable_numbers_are_sent_as_null() {
        let mut draft = OrderDraft::default();
        draft.first_line_mut().quantity = "lots".to_string();
        draft.total = String::new();

        let body = serde_json::to_value(draft.to_request()).unwrap();
        assert!(body["items"][0]["quantity"].is_null());
        assert!(body["total"].is_null());
    }
}
