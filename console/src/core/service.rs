//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{LoginResponse, NewProduct, Order, Product, ProductPatch, User};

use crate::core::error::TransportError;
use crate::services::api::Attachment;

/// Storefront API operations used by the console.
///
/// [`crate::services::api::ApiClient`] is the production implementation;
/// tests substitute an in-memory one.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password. The session cookie is kept by the client.
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, TransportError>;

    /// End the server-side session
    async fn logout(&self) -> Result<(), TransportError>;

    /// Full product catalog
    async fn list_products(&self) -> Result<Vec<Product>, TransportError>;

    /// Create a product. Sent as multipart when `attachments` is non-empty.
    async fn create_product(
        &self,
        product: NewProduct,
        attachments: Vec<Attachment>,
    ) -> Result<Product, TransportError>;

    /// Patch a product. Sent as multipart when `image` is present.
    async fn update_product(
        &self,
        patch: ProductPatch,
        image: Option<Attachment>,
    ) -> Result<Product, TransportError>;

    /// Delete a product
    async fn delete_product(&self, product_id: String) -> Result<(), TransportError>;

    /// All customers, without their orders
    async fn list_users(&self) -> Result<Vec<User>, TransportError>;

    /// All orders
    async fn list_orders(&self) -> Result<Vec<Order>, TransportError>;

    /// Orders placed by one customer
    async fn list_user_orders(&self, user_id: String) -> Result<Vec<Order>, TransportError>;
}
