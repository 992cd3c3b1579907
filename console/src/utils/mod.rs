//! # Utilities
//!
//! - `validation`: form field checks shared by the login and product forms

pub mod validation;
