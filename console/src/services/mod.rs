//! # Services Module
//!
//! External service integrations for the admin console.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        Admin console         │
//! │  ┌────────────────────────┐  │
//! │  │  ApiClient (api/)      │  │
//! │  └───────────┬────────────┘  │
//! └──────────────┼───────────────┘
//!                │ HTTP/JSON + multipart, session cookie
//!                ▼
//! ┌──────────────────────────────┐
//! │  Storefront API              │
//! │  /auth/*  /product/*         │
//! │  /order/* /user/*            │
//! └──────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, TransportError>`:
//! - Network errors: `NetworkFailure`
//! - 401/403: `Unauthorized`
//! - Other non-2xx, or `{ success: false }`: `ServerError { status, message }`
//! - Undecodable bodies: `Decode`

pub mod api;
