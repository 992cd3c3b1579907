//! # Storefront Admin Console - Library Root
//!
//! Client-side state layer for the storefront's admin console. It keeps
//! local copies of products, orders and customers in step with the REST API,
//! runs the product create/edit/delete workflows, and derives dashboard
//! metrics from the raw collections.
//!
//! Rendering is left to whatever shell embeds [`App`]; the bundled
//! `admin-console` binary is a headless driver.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              console (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - stores, workflows, aggregation, events   │
//! │  services   - reqwest client for the storefront API    │
//! │  core       - ApiService trait, error types            │
//! │  config     - environment configuration                │
//! │  debug      - tracing subscriber, file logs            │
//! │  utils      - form validation                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON + multipart, session cookie
//!          ▼
//! ┌─────────────────┐
//! │ Storefront API  │
//! └─────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── app (state, events, handlers, tasks)
//!       ├── core::service::ApiService
//!       │   └── services::api::ApiClient (reqwest)
//!       └── utils::validation
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Reconciliation
//!
//! Actions spawn their request on Tokio and return. Each result comes back as
//! an [`AppEvent`] over an `async_channel`, and is applied to
//! `Arc<RwLock<AppState>>` on the control thread. Stores change only after
//! the server acknowledges.
//!
//! ### Stale Response Guard
//!
//! Opening a customer's order history issues a new token. A response whose
//! token is not the open panel's is dropped.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::error::{AppError, Result};
