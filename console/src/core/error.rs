//! # Common Error Types
//!
//! Consolidated error handling for the console.
//!
//! ## Error Categories
//!
//! - [`TransportError`]: failures talking to the storefront API
//! - [`crate::utils::validation::ValidationErrors`]: local field checks that
//!   block a submission before any request is made
//! - [`crate::app::StoreError`]: a server answer that does not fit the local store
//! - [`AppError`]: the umbrella type returned by [`crate::app::App`] actions
//!
//! A response discarded by the drill-down guard is not an error; it is
//! logged at debug level and dropped.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use console::core::error::AppError;
//!
//! fn guard_submit(in_flight: bool) -> Result<(), AppError> {
//!     if in_flight {
//!         return Err(AppError::Busy("product form"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::app::StoreError;
use crate::utils::validation::ValidationErrors;

/// Failure of a single request to the storefront API.
///
/// Messages are kept as strings so results can travel through the
/// (cloneable) event channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, DNS failure, reset, client-side timeout.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// HTTP 401/403. The session cookie is missing or expired.
    #[error("Unauthorized: please log in again")]
    Unauthorized,

    /// Non-2xx status, or a 2xx carrying `{ success: false }`.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request could not be built (e.g. a malformed attachment).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, TransportError::Unauthorized)
    }

    /// Message suitable for a notification or an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::ServerError { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Application-wide error type returned by console actions.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Transport(#[from] TransportError),

    /// Local field validation failed; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A server answer could not be reconciled with local state.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A submission for this form is already in flight.
    #[error("A {0} submission is already in progress")]
    Busy(&'static str),

    /// Action not valid in the current state (no draft open, no session).
    #[error("State error: {0}")]
    State(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_server_message() {
        let err = TransportError::ServerError {
            status: 400,
            message: "Product not found".to_string(),
        };
        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(err.to_string(), "Server error (400): Product not found");
    }

    #[test]
    fn other_errors_use_display() {
        assert_eq!(
            TransportError::NetworkFailure("connection refused".into()).user_message(),
            "Network error: connection refused"
        );
        assert!(TransportError::Unauthorized.is_unauthorized());
    }

    #[test]
    fn busy_error_names_the_form() {
        assert_eq!(
            AppError::Busy("product").to_string(),
            "A product submission is already in progress"
        );
    }
}
