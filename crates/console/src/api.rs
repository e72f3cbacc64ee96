//! Client seam for the products, inventory and orders services.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use storefront_core::Sku;
use storefront_inventory::UpdateStockRequest;
use storefront_products::{CreateProductRequest, Product};
use storefront_sales::PlaceOrderRequest;

use crate::config::ServiceEndpoints;
use crate::error::RequestError;

/// The four calls the console makes. Response bodies of the write calls are
/// not part of the contract.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, RequestError>;

    /// `POST /products`
    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), RequestError>;

    /// `PATCH /inventory/{sku}`
    async fn update_stock(
        &self,
        sku: &Sku,
        request: &UpdateStockRequest,
    ) -> Result<(), RequestError>;

    /// `POST /orders`
    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<(), RequestError>;
}

/// `StorefrontApi` over plain REST/JSON.
///
/// No timeouts and no retries: a call resolves when the service (or the
/// network stack) says so.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    endpoints: ServiceEndpoints,
}

impl HttpStorefrontApi {
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }
}

/// Send a request; any non-2xx status is an error.
async fn send(req: RequestBuilder) -> Result<Response, RequestError> {
    let resp = req
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RequestError::Api {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }

    Ok(resp)
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_products(&self) -> Result<Vec<Product>, RequestError> {
        let url = self.endpoints.products_url();
        tracing::debug!(%url, "GET products");

        let resp = send(self.client.get(url)).await?;
        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), RequestError> {
        let url = self.endpoints.products_url();
        tracing::debug!(%url, sku = %request.sku, "POST product");

        send(self.client.post(url).json(request)).await?;
        Ok(())
    }

    async fn update_stock(
        &self,
        sku: &Sku,
        request: &UpdateStockRequest,
    ) -> Result<(), RequestError> {
        let url = self.endpoints.inventory_url(sku);
        tracing::debug!(%url, quantity = ?request.quantity, "PATCH stock");

        send(self.client.patch(url).json(request)).await?;
        Ok(())
    }

    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<(), RequestError> {
        let url = self.endpoints.orders_url();
        tracing::debug!(%url, items = request.items.len(), total = request.total, "POST order");

        send(self.client.post(url).json(request)).await?;
        Ok(())
    }
}
