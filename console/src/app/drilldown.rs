//! # Customer Order Drill-down
//!
//! One panel at a time shows the order history of a single customer. Each
//! open gets a fresh token; a response is applied only if both its user id
//! and its token match the panel that is open when it arrives. Anything
//! else is a stale response and is dropped.

use shared::{Order, User};

use crate::core::error::TransportError;

/// Identifies one opening of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// The open panel.
#[derive(Debug, Clone)]
pub struct DrillDownPanel {
    pub user_id: String,
    pub user: Option<User>,
    pub token: RequestToken,
    pub loading: bool,
    pub orders: Vec<Order>,
    pub error: Option<String>,
}

/// What happened to a response handed to [`DrillDown::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    StaleResponseDiscarded,
}

#[derive(Debug, Default)]
pub struct DrillDown {
    panel: Option<DrillDownPanel>,
    last_token: u64,
}

impl DrillDown {
    pub fn panel(&self) -> Option<&DrillDownPanel> {
        self.panel.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Open (or re-target) the panel for `user_id` and return its token.
    pub fn open(&mut self, user_id: &str, user: Option<User>) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.panel = Some(DrillDownPanel {
            user_id: user_id.to_string(),
            user,
            token,
            loading: true,
            orders: Vec::new(),
            error: None,
        });
        token
    }

    pub fn close(&mut self) {
        self.panel = None;
    }

    pub fn is_current(&self, user_id: &str, token: RequestToken) -> bool {
        self.panel
            .as_ref()
            .is_some_and(|panel| panel.user_id == user_id && panel.token == token)
    }

    /// Apply a fetch result if it belongs to the open panel.
    pub fn resolve(
        &mut self,
        user_id: &str,
        token: RequestToken,
        result: Result<Vec<Order>, TransportError>,
    ) -> Resolution {
        if !self.is_current(user_id, token) {
            tracing::debug!(user_id = %user_id, token = ?token, "Stale order history discarded");
            return Resolution::StaleResponseDiscarded;
        }

        if let Some(panel) = self.panel.as_mut() {
            panel.loading = false;
            match result {
                Ok(orders) => {
                    panel.orders = orders;
                    panel.error = None;
                }
                Err(e) => {
                    panel.orders.clear();
                    panel.error = Some(e.user_message());
                }
            }
        }
        Resolution::Applied
    }
}
