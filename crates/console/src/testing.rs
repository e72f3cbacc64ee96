//! In-memory fakes for controller and shell tests.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tracing::Level;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

use storefront_core::Sku;
use storefront_inventory::UpdateStockRequest;
use storefront_products::{CreateProductRequest, Product, ProductId};
use storefront_sales::PlaceOrderRequest;

use crate::api::StorefrontApi;
use crate::error::RequestError;
use crate::notify::Notifier;

pub fn product(sku: &str, name: &str, price: f64) -> Product {
    Product {
        product_id: ProductId::new(Uuid::now_v7()),
        sku: Sku::new(sku),
        name: name.to_string(),
        price,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListProducts,
    CreateProduct(CreateProductRequest),
    UpdateStock(Sku, UpdateStockRequest),
    PlaceOrder(PlaceOrderRequest),
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    products: Vec<Product>,
    fail_list: bool,
    fail_create: bool,
    fail_stock: bool,
    fail_order: bool,
}

/// Records every call; each endpoint can be switched to answer with a 500.
#[derive(Debug, Clone, Default)]
pub struct RecordingApi {
    state: Arc<Mutex<State>>,
}

impl RecordingApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        api.set_products(products);
        api
    }

    pub fn set_products(&self, products: Vec<Product>) {
        self.state.lock().unwrap().products = products;
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    pub fn fail_stock(&self, fail: bool) {
        self.state.lock().unwrap().fail_stock = fail;
    }

    pub fn fail_order(&self, fail: bool) {
        self.state.lock().unwrap().fail_order = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call, fail: impl Fn(&State) -> bool) -> Result<(), RequestError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if fail(&state) {
            return Err(RequestError::Api {
                status: 500,
                body: "internal error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StorefrontApi for RecordingApi {
    async fn list_products(&self) -> Result<Vec<Product>, RequestError> {
        self.record(Call::ListProducts, |s| s.fail_list)?;
        Ok(self.state.lock().unwrap().products.clone())
    }

    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), RequestError> {
        self.record(Call::CreateProduct(request.clone()), |s| s.fail_create)
    }

    async fn update_stock(
        &self,
        sku: &Sku,
        request: &UpdateStockRequest,
    ) -> Result<(), RequestError> {
        self.record(Call::UpdateStock(sku.clone(), *request), |s| s.fail_stock)
    }

    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<(), RequestError> {
        self.record(Call::PlaceOrder(request.clone()), |s| s.fail_order)
    }
}

/// Collects alert messages instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Captures this thread's log output as JSON lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.0))
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Route events on the current thread here until the guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .json()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn records(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    pub fn at_level(&self, level: &str) -> Vec<Value> {
        self.records()
            .into_iter()
            .filter(|r| r["level"] == level)
            .collect()
    }
}
