//! # Customer Handlers
//!
//! Search, layout and the per-customer order drill-down.

use crate::app::drilldown::RequestToken;
use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::store::ViewMode;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Internal handler function - use [`crate::app::App::set_customer_search`] instead.
pub(crate) fn set_search(state: Arc<RwLock<AppState>>, query: String) {
    let mut state = state.write();
    state.customer_search = query;
}

/// Internal handler function - use [`crate::app::App::set_customer_view`] instead.
pub(crate) fn set_view(state: Arc<RwLock<AppState>>, view: ViewMode) {
    let mut state = state.write();
    state.customer_view = view;
}

/// Open the order history panel for one customer
///
/// Any response for an earlier opening is discarded when it arrives.
///
/// Internal handler function - use [`crate::app::App::view_orders`] instead.
pub(crate) fn view_orders(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    user_id: String,
) -> RequestToken {
    let (api_client, token) = {
        let mut state = state.write();
        let user = state.users.get(&user_id).cloned();
        let token = state.drilldown.open(&user_id, user);
        (state.api_client.clone(), token)
    };

    tracing::debug!(user_id = %user_id, token = ?token, "Fetching customer orders");
    tokio::spawn(async move {
        let result = api_client.list_user_orders(user_id.clone()).await;
        let _ = event_tx
            .send(AppEvent::UserOrdersLoaded {
                user_id,
                token,
                result,
            })
            .await;
    });
    token
}

/// Internal handler function - use [`crate::app::App::close_orders`] instead.
pub(crate) fn close_orders(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.drilldown.close();
}
