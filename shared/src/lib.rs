//! # Storefront Wire Types
//!
//! This library defines the contract between the admin console and the storefront
//! REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login/logout DTOs and error bodies
//!   - **[`dto::catalog`]**: Products, categories and product mutations
//!   - **[`dto::orders`]**: Orders, line items and status normalization
//!   - **[`dto::users`]**: Customer records
//! - **[`utils`]**: Shared helpers for display and form parsing
//!
//! ## Wire Format
//!
//! The storefront speaks camelCase JSON with Mongo-style `_id` identifiers:
//! - Struct fields are `snake_case` in Rust and `camelCase` on the wire
//!   (`#[serde(rename_all = "camelCase")]`)
//! - Identifiers are renamed from `_id`
//! - Related records arrive either as a bare id or as a populated object,
//!   see [`dto::orders::Reference`]
//! - Some list endpoints answer with a wrapped object or a bare array,
//!   see [`dto::users::UsersPayload`] and [`dto::orders::OrdersPayload`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::Product;
//!
//! let json = r#"{"_id":"p1","name":"Tee","price":499,"category":"men"}"#;
//! let product: Product = serde_json::from_str(json).unwrap();
//! assert_eq!(product.id, "p1");
//! assert!(product.images.is_empty());
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: every DTO is public API
pub use dto::*;
pub use utils::*;
