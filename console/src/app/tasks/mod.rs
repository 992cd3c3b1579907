//! # Async Tasks
//!
//! Background fetches that fill the entity stores.

pub mod catalog;
pub mod dashboard;
