//! In-memory [`ApiService`] for workflow tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use parking_lot::Mutex;
use shared::{
    Category, LoginResponse, NewProduct, Order, OrderStatus, Product, ProductPatch, User,
};
use tokio::sync::Notify;

use crate::core::error::TransportError;
use crate::core::service::ApiService;
use crate::services::api::Attachment;

/// Scripted storefront. Every call is recorded; `fail_next` makes the next
/// call of any kind fail; `gate` holds a customer's order history until
/// the returned `Notify` is signalled.
#[derive(Default)]
pub(crate) struct MockApi {
    calls: Mutex<Vec<&'static str>>,
    fail_next: Mutex<Option<TransportError>>,
    login_user: Mutex<Option<User>>,
    pub products: Mutex<Vec<Product>>,
    pub orders: Mutex<Vec<Order>>,
    pub users: Mutex<Vec<User>>,
    pub user_orders: Mutex<HashMap<String, Vec<Order>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    omit_images_on_update: AtomicBool,
    next_id: AtomicU64,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_catalog(products: Vec<Product>) -> Arc<Self> {
        let api = Self::default();
        *api.products.lock() = products;
        Arc::new(api)
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == name).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn fail_next(&self, error: TransportError) {
        *self.fail_next.lock() = Some(error);
    }

    pub fn login_as(&self, user: User) {
        *self.login_user.lock() = Some(user);
    }

    /// Answer updates without an `images` field, like the storefront does
    /// when no file was uploaded.
    pub fn omit_images_on_update(&self) {
        self.omit_images_on_update.store(true, Ordering::SeqCst);
    }

    pub fn gate(&self, user_id: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .insert(user_id.to_string(), Arc::clone(&notify));
        notify
    }

    fn record(&self, name: &'static str) -> Result<(), TransportError> {
        self.calls.lock().push(name);
        match self.fail_next.lock().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn login(&self, email: String, _password: String) -> Result<LoginResponse, TransportError> {
        self.record("login")?;
        let user = self
            .login_user
            .lock()
            .clone()
            .unwrap_or_else(|| user("admin-1", "Admin", &email, Some("admin")));
        Ok(LoginResponse { user, message: None })
    }

    async fn logout(&self) -> Result<(), TransportError> {
        self.record("logout")
    }

    async fn list_products(&self) -> Result<Vec<Product>, TransportError> {
        self.record("list_products")?;
        Ok(self.products.lock().clone())
    }

    async fn create_product(
        &self,
        product: NewProduct,
        attachments: Vec<Attachment>,
    ) -> Result<Product, TransportError> {
        self.record("create_product")?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut images = product.images;
        images.extend(
            attachments
                .iter()
                .map(|a| format!("https://cdn/{}", a.file_name)),
        );
        let created = Product {
            id: format!("srv-{id}"),
            name: product.name,
            description: product.description,
            price: product.price,
            discount_price: product.discount_price,
            category: product.category.into(),
            brand: product.brand,
            stock: product.stock,
            images,
            sizes: product.sizes,
            colors: product.colors,
        };
        self.products.lock().push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        patch: ProductPatch,
        image: Option<Attachment>,
    ) -> Result<Product, TransportError> {
        self.record("update_product")?;
        let mut products = self.products.lock();
        let product = products
            .iter_mut()
            .find(|p| p.id == patch.product_id)
            .ok_or_else(|| TransportError::ServerError {
                status: 404,
                message: "Product not found".to_string(),
            })?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category.into();
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(image) = image {
            product.images = vec![format!("https://cdn/{}", image.file_name)];
        }

        let mut answer = product.clone();
        if self.omit_images_on_update.load(Ordering::SeqCst) {
            answer.images.clear();
        }
        Ok(answer)
    }

    async fn delete_product(&self, product_id: String) -> Result<(), TransportError> {
        self.record("delete_product")?;
        self.products.lock().retain(|p| p.id != product_id);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, TransportError> {
        self.record("list_users")?;
        Ok(self.users.lock().clone())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, TransportError> {
        self.record("list_orders")?;
        Ok(self.orders.lock().clone())
    }

    async fn list_user_orders(&self, user_id: String) -> Result<Vec<Order>, TransportError> {
        self.record("list_user_orders")?;
        let gate = self.gates.lock().get(&user_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(self
            .user_orders
            .lock()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn user(id: &str, name: &str, email: &str, role: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
        avatar: None,
        role: role.map(str::to_string),
    }
}

pub(crate) fn product(id: &str, name: &str, images: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: "Cotton".to_string(),
        price: 499.0,
        discount_price: None,
        category: Category::Women.into(),
        brand: "Culture's".to_string(),
        stock: 10,
        images: images.iter().map(|s| s.to_string()).collect(),
        sizes: vec![],
        colors: vec![],
    }
}

pub(crate) fn order(id: &str, total: f64, status: &str, minutes: i64) -> Order {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    Order {
        id: id.to_string(),
        user: None,
        items: vec![],
        subtotal: total,
        tax_amount: 0.0,
        shipping_charges: 0.0,
        total_amount: total,
        status: OrderStatus::new(status),
        created_at: base + Duration::minutes(minutes),
        shipping_address: None,
    }
}
