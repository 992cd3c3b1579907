//! # Storefront API Client Module
//!
//! HTTP client for the storefront REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports
//! ├── client.rs    - ApiClient, request bodies, status classification
//! ├── auth.rs      - /auth/login, /auth/logout
//! ├── products.rs  - /product/* (list, create, update, delete)
//! ├── orders.rs    - /order/all, /order/user/:id
//! └── users.rs     - /user/getusers
//! ```

pub mod auth;
pub mod client;
pub mod orders;
pub mod products;
pub mod users;

pub use client::{ApiClient, Attachment, MultipartBody, RequestBody};
