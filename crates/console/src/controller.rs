//! Form controller: the three drafts, the product list, and the submit handlers.
//!
//! Every handler makes exactly one service call (plus the list refresh after a
//! product is created). Failures are logged and swallowed: the draft or list
//! simply does not change.

use storefront_inventory::StockDraft;
use storefront_products::{Product, ProductDraft};
use storefront_sales::OrderDraft;

use crate::api::StorefrontApi;
use crate::notify::{Notifier, ORDER_PLACED, STOCK_UPDATED};

/// Owns all form state; nothing here is shared.
pub struct FormController<A, N> {
    api: A,
    notifier: N,
    products: Vec<Product>,
    product_draft: ProductDraft,
    stock_draft: StockDraft,
    order_draft: OrderDraft,
}

impl<A, N> FormController<A, N>
where
    A: StorefrontApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            products: Vec::new(),
            product_draft: ProductDraft::default(),
            stock_draft: StockDraft::default(),
            order_draft: OrderDraft::default(),
        }
    }

    /// Initial product list load. Call once, when the view is first shown.
    pub async fn mount(&mut self) {
        self.load_products().await;
    }

    /// Replace the cached list with the service's; keep the old one on failure.
    #[tracing::instrument(name = "load_products", skip_all)]
    pub async fn load_products(&mut self) {
        match self.api.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "product list refreshed");
                self.products = products;
            }
            Err(err) => tracing::error!(error = %err, "error fetching products"),
        }
    }

    /// Create a product from the draft, then refresh the list and clear the draft.
    #[tracing::instrument(name = "submit_product", skip_all, fields(sku = %self.product_draft.sku))]
    pub async fn submit_product(&mut self) {
        let request = self.product_draft.to_request();
        match self.api.create_product(&request).await {
            Ok(()) => {
                tracing::info!(name = %request.name, price = request.price, "product created");
                self.load_products().await;
                self.product_draft = ProductDraft::default();
            }
            Err(err) => tracing::error!(error = %err, "error creating product"),
        }
    }

    /// Set the stock level for the draft's SKU, confirm, and clear the draft.
    #[tracing::instrument(name = "submit_stock", skip_all, fields(sku = %self.stock_draft.sku))]
    pub async fn submit_stock(&mut self) {
        let sku = self.stock_draft.sku();
        let request = self.stock_draft.to_request();
        match self.api.update_stock(&sku, &request).await {
            Ok(()) => {
                tracing::info!(quantity = ?request.quantity, "stock updated");
                self.notifier.alert(STOCK_UPDATED);
                self.stock_draft = StockDraft::default();
            }
            Err(err) => tracing::error!(error = %err, "error updating stock"),
        }
    }

    /// Place the drafted order, confirm, and reset to one empty line.
    #[tracing::instrument(name = "submit_order", skip_all, fields(items = self.order_draft.items.len()))]
    pub async fn submit_order(&mut self) {
        let request = self.order_draft.to_request();
        match self.api.place_order(&request).await {
            Ok(()) => {
                tracing::info!(total = request.total, "order placed");
                self.notifier.alert(ORDER_PLACED);
                self.order_draft = OrderDraft::default();
            }
            Err(err) => tracing::error!(error = %err, "error placing order"),
        }
    }
}

impl<A, N> FormController<A, N> {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_draft(&self) -> &ProductDraft {
        &self.product_draft
    }

    pub fn stock_draft(&self) -> &StockDraft {
        &self.stock_draft
    }

    pub fn order_draft(&self) -> &OrderDraft {
        &self.order_draft
    }

    pub fn set_product_sku(&mut self, sku: impl Into<String>) {
        self.product_draft.sku = sku.into();
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.product_draft.name = name.into();
    }

    pub fn set_product_price(&mut self, price: impl Into<String>) {
        self.product_draft.price = price.into();
    }

    pub fn set_stock_sku(&mut self, sku: impl Into<String>) {
        self.stock_draft.sku = sku.into();
    }

    pub fn set_stock_quantity(&mut self, quantity: impl Into<String>) {
        self.stock_draft.quantity = quantity.into();
    }

    pub fn set_order_sku(&mut self, sku: impl Into<String>) {
        self.order_draft.first_line_mut().sku = sku.into();
    }

    pub fn set_order_quantity(&mut self, quantity: impl Into<String>) {
        self.order_draft.first_line_mut().quantity = quantity.into();
    }

    pub fn set_order_total(&mut self, total: impl Into<String>) {
        self.order_draft.total = total.into();
    }
}
