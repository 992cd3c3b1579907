//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the storefront REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request/response and error bodies
//! - [`catalog`] - Products, categories, create/patch/delete payloads
//! - [`orders`] - Orders, line items, shipping addresses, status table
//! - [`users`] - Customer records
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire
//! - **Identifiers**: `_id`
//! - **Optional fields**: omitted when `None`
//! - **Categories**: lowercase strings
//!
//! ## Example JSON Communication
//!
//! ```text
//! PUT /api/product/update-products
//! Content-Type: application/json
//!
//! { "productId": "665f...", "price": 799, "stock": 12 }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! { "success": true, "updatedProduct": { "_id": "665f...", "name": "Tee", ... } }
//! ```

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod users;

pub use auth::*;
pub use catalog::*;
pub use orders::*;
pub use users::*;
