//! # Core Abstractions
//!
//! Core traits and error types shared by the rest of the console.
//!
//! - **[`error`]**: Error types (`TransportError`, `AppError`, `Result<T>`)
//! - **[`service`]**: The [`ApiService`] trait every workflow talks through
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use console::core::ApiService;
//! use console::services::api::ApiClient;
//!
//! let api: Arc<dyn ApiService> =
//!     Arc::new(ApiClient::new("http://localhost:8000/api").unwrap());
//! let app = console::App::with_service(api);
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result, TransportError};
pub use service::ApiService;
