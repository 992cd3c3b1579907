//! # Application Events
//!
//! Results of background requests, sent to the control thread and applied
//! there by the event handler.

use shared::{LoginResponse, Order, Product, User};

use crate::app::drilldown::RequestToken;
use crate::app::state::SessionEpoch;
use crate::core::error::TransportError;

/// Async task results sent to the control thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, TransportError>),
    /// Logout call completed
    LogoutResult(Result<(), TransportError>),
    /// Product catalog fetched
    ProductsLoaded {
        epoch: SessionEpoch,
        result: Result<Vec<Product>, TransportError>,
    },
    /// All orders fetched
    OrdersLoaded {
        epoch: SessionEpoch,
        result: Result<Vec<Order>, TransportError>,
    },
    /// All customers fetched
    UsersLoaded {
        epoch: SessionEpoch,
        result: Result<Vec<User>, TransportError>,
    },
    /// Create submission resolved
    ProductCreated {
        epoch: SessionEpoch,
        result: Result<Product, TransportError>,
    },
    /// Edit submission resolved
    ProductUpdated {
        epoch: SessionEpoch,
        product_id: String,
        image_sent: bool,
        result: Result<Product, TransportError>,
    },
    /// Delete submission resolved
    ProductDeleted {
        epoch: SessionEpoch,
        product_id: String,
        result: Result<(), TransportError>,
    },
    /// Order history of one customer fetched
    UserOrdersLoaded {
        user_id: String,
        token: RequestToken,
        result: Result<Vec<Order>, TransportError>,
    },
}

impl AppEvent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::LogoutResult(_) => "LogoutResult",
            AppEvent::ProductsLoaded { .. } => "ProductsLoaded",
            AppEvent::OrdersLoaded { .. } => "OrdersLoaded",
            AppEvent::UsersLoaded { .. } => "UsersLoaded",
            AppEvent::ProductCreated { .. } => "ProductCreated",
            AppEvent::ProductUpdated { .. } => "ProductUpdated",
            AppEvent::ProductDeleted { .. } => "ProductDeleted",
            AppEvent::UserOrdersLoaded { .. } => "UserOrdersLoaded",
        }
    }
}
