//! # Action Handlers
//!
//! User actions organized by screen. Each handler validates on the calling
//! thread, updates form state, and spawns the network call; results come
//! back as [`crate::app::AppEvent`]s.

pub mod auth;
pub mod customers;
pub mod navigation;
pub mod products;
