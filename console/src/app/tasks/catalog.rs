//! # Catalog Tasks
//!
//! Async task for loading the product catalog.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

/// Fetch the full product list
///
/// Internal task function - spawns async task to fetch products and send results via event channel.
pub(crate) fn fetch_products(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, epoch) = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if !state.products.begin_load() {
            tracing::debug!("Product fetch already in flight");
            return;
        }
        (state.api_client.clone(), state.session_epoch)
    };

    spawn(async move {
        let result = api_client.list_products().await;
        match &result {
            Ok(products) => tracing::info!(product_count = products.len(), "Fetched products"),
            Err(e) => tracing::error!(error = %e, "Failed to fetch products"),
        }
        let _ = event_tx.send(AppEvent::ProductsLoaded { epoch, result }).await;
    });
}
