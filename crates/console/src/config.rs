//! Service endpoint configuration.
//!
//! Each service has a hard-coded localhost default; an environment variable
//! can point the console somewhere else.

use storefront_core::Sku;
use thiserror::Error;
use url::Url;

pub const DEFAULT_PRODUCTS_URL: &str = "http://localhost:8081";
pub const DEFAULT_INVENTORY_URL: &str = "http://localhost:8082";
pub const DEFAULT_ORDERS_URL: &str = "http://localhost:8083";

pub const PRODUCTS_URL_ENV: &str = "STOREFRONT_PRODUCTS_URL";
pub const INVENTORY_URL_ENV: &str = "STOREFRONT_INVENTORY_URL";
pub const ORDERS_URL_ENV: &str = "STOREFRONT_ORDERS_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} URL {value:?}: {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} URL {value:?} is not an http(s) base URL")]
    UnsupportedUrl { name: &'static str, value: String },
}

/// Base URLs of the three backing services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    products: Url,
    inventory: Url,
    orders: Url,
}

impl ServiceEndpoints {
    pub fn new(products: &str, inventory: &str, orders: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            products: parse_base("products", products)?,
            inventory: parse_base("inventory", inventory)?,
            orders: parse_base("orders", orders)?,
        })
    }

    /// The hard-coded localhost endpoints.
    pub fn localhost() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_PRODUCTS_URL, DEFAULT_INVENTORY_URL, DEFAULT_ORDERS_URL)
    }

    /// Read overrides from `STOREFRONT_*_URL`, falling back to localhost.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServiceEndpoints::from_env`], with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let products = lookup(PRODUCTS_URL_ENV).unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string());
        let inventory =
            lookup(INVENTORY_URL_ENV).unwrap_or_else(|| DEFAULT_INVENTORY_URL.to_string());
        let orders = lookup(ORDERS_URL_ENV).unwrap_or_else(|| DEFAULT_ORDERS_URL.to_string());

        Self::new(&products, &inventory, &orders)
    }

    pub fn products_base(&self) -> &Url {
        &self.products
    }

    pub fn inventory_base(&self) -> &Url {
        &self.inventory
    }

    pub fn orders_base(&self) -> &Url {
        &self.orders
    }

    /// `{products}/products`
    pub fn products_url(&self) -> Url {
        with_segments(&self.products, &["products"])
    }

    /// `{inventory}/inventory/{sku}`, with the SKU encoded as one path segment.
    pub fn inventory_url(&self, sku: &Sku) -> Url {
        with_segments(&self.inventory, &["inventory", sku.as_str()])
    }

    /// `{orders}/orders`
    pub fn orders_url(&self) -> Url {
        with_segments(&self.orders, &["orders"])
    }
}

fn parse_base(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedUrl {
            name,
            value: value.to_string(),
        });
    }

    Ok(url)
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Bases are validated in `parse_base`, so they always accept segments.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
