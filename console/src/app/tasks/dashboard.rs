//! # Dashboard Tasks
//!
//! Async tasks for the two independent sources the dashboard aggregates:
//! all orders and all customers. Either may finish first; metrics are
//! recomputed when both are loaded.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch every order
///
/// Internal task function - spawns async task to fetch orders and send results via event channel.
pub(crate) fn fetch_orders(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, epoch) = {
        let mut state = state.write();
        if !state.orders.begin_load() {
            tracing::debug!("Order fetch already in flight");
            return;
        }
        (state.api_client.clone(), state.session_epoch)
    };

    spawn(async move {
        let result = api_client.list_orders().await;
        match &result {
            Ok(orders) => tracing::info!(order_count = orders.len(), "Fetched orders"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch orders"),
        }
        let _ = event_tx.send(AppEvent::OrdersLoaded { epoch, result }).await;
    });
}

/// Fetch every customer
///
/// Internal task function - spawns async task to fetch users and send results via event channel.
pub(crate) fn fetch_users(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, epoch) = {
        let mut state = state.write();
        if !state.users.begin_load() {
            tracing::debug!("User fetch already in flight");
            return;
        }
        (state.api_client.clone(), state.session_epoch)
    };

    spawn(async move {
        let result = api_client.list_users().await;
        match &result {
            Ok(users) => tracing::info!(user_count = users.len(), "Fetched users"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch users"),
        }
        let _ = event_tx.send(AppEvent::UsersLoaded { epoch, result }).await;
    });
}

/// Fetch both dashboard sources
pub(crate) fn refresh_dashboard(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    fetch_orders(Arc::clone(&state), event_tx.clone());
    fetch_users(state, event_tx);
}
