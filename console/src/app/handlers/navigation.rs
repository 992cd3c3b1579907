//! # Navigation Handlers
//!
//! Handlers for screen navigation and tab changes.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ProductTab, Screen};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with session guard
///
/// Entering a screen starts the loads it renders from.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn navigate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    {
        let mut state = state.write();
        if screen.requires_session() && !state.is_authenticated() {
            tracing::info!("Access denied: {} requires a session, redirecting to login", screen.title());
            state.current_screen = Screen::Login;
            return;
        }
        state.current_screen = screen;
    }

    match screen {
        Screen::Login => {}
        Screen::Dashboard => tasks::dashboard::refresh_dashboard(state, event_tx),
        Screen::Products => tasks::catalog::fetch_products(state, event_tx),
        Screen::Orders => tasks::dashboard::fetch_orders(state, event_tx),
        Screen::Customers => tasks::dashboard::fetch_users(state, event_tx),
    }
}

/// Handle products tab change
///
/// Internal handler function - use [`crate::app::App::set_product_tab`] instead.
pub(crate) fn set_product_tab(state: Arc<RwLock<AppState>>, tab: ProductTab) {
    let mut state = state.write();
    state.product_tab = tab;
}
