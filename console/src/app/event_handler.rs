//! # Event Handler
//!
//! Applies async results on the control thread. This is the only place the
//! entity stores change after a request: a store is patched only once the
//! server has acknowledged the operation.

use shared::{LoginResponse, Order, Product, User, ADMIN_ROLE};

use crate::app::drilldown::{RequestToken, Resolution};
use crate::app::draft::Phase;
use crate::app::state::SessionEpoch;
use crate::app::handlers;
use crate::app::{App, AppEvent, Screen};
use crate::core::error::TransportError;

const ACCESS_DENIED: &str = "Access denied! Admins only.";
const LOGIN_FAILED: &str = "Login failed. Try again.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event and releases it before starting any
    /// follow-up request.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), "Handling event");

        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::LogoutResult(result) => self.handle_logout_result(result),
            AppEvent::ProductsLoaded { epoch, result } => self.handle_products_loaded(epoch, result),
            AppEvent::OrdersLoaded { epoch, result } => self.handle_orders_loaded(epoch, result),
            AppEvent::UsersLoaded { epoch, result } => self.handle_users_loaded(epoch, result),
            AppEvent::ProductCreated { epoch, result } => self.handle_product_created(epoch, result),
            AppEvent::ProductUpdated {
                epoch,
                product_id,
                image_sent,
                result,
            } => self.handle_product_updated(epoch, product_id, image_sent, result),
            AppEvent::ProductDeleted {
                epoch,
                product_id,
                result,
            } => self.handle_product_deleted(epoch, product_id, result),
            AppEvent::UserOrdersLoaded {
                user_id,
                token,
                result,
            } => self.handle_user_orders_loaded(user_id, token, result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse, TransportError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let granted = {
            let mut state = self.state.write();
            state.login.phase = Phase::Idle;

            match result {
                Ok(response) if response.user.role.as_deref() == Some(ADMIN_ROLE) => {
                    tracing::info!(user_id = %response.user.id, "Admin session started");
                    state.login.error = None;
                    state.login.password.clear();
                    state.session = Some(crate::app::Session {
                        user: response.user,
                    });
                    true
                }
                Ok(response) => {
                    tracing::warn!(
                        user_id = %response.user.id,
                        role = ?response.user.role,
                        "Login rejected: not an admin"
                    );
                    state.login.error = Some(ACCESS_DENIED.to_string());
                    false
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    state.login.error = Some(login_error_message(&e));
                    false
                }
            }
        }; // Lock released here

        if granted {
            handlers::navigation::navigate(self.state.clone(), self.event_tx.clone(), Screen::Dashboard);
        }
    }

    fn handle_logout_result(&mut self, result: Result<(), TransportError>) {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Logout call failed, clearing local session anyway");
        }

        let mut state = self.state.write();
        state.clear_session();
        state.reset_forms();
        state.login.error = None;
        state.notifications.info("Logged out");
    }

    fn handle_products_loaded(&mut self, epoch: SessionEpoch, result: Result<Vec<Product>, TransportError>) {
        let mut state = self.state.write();
        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "ProductsLoaded", "Dropping result from an ended session");
            return;
        }
        match result {
            Ok(products) => state.products.load(products),
            Err(e) => {
                state.products.fail_load();
                state.report_transport_error("Failed to load products", &e);
            }
        }
    }

    fn handle_orders_loaded(&mut self, epoch: SessionEpoch, result: Result<Vec<Order>, TransportError>) {
        let mut state = self.state.write();
        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "OrdersLoaded", "Dropping result from an ended session");
            return;
        }
        match result {
            Ok(orders) => {
                state.orders.load(orders);
                state.refresh_dashboard_metrics();
            }
            Err(e) => {
                state.orders.fail_load();
                state.report_transport_error("Failed to load orders", &e);
            }
        }
    }

    fn handle_users_loaded(&mut self, epoch: SessionEpoch, result: Result<Vec<User>, TransportError>) {
        let mut state = self.state.write();
        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "UsersLoaded", "Dropping result from an ended session");
            return;
        }
        match result {
            Ok(users) => {
                state.users.load(users);
                state.refresh_dashboard_metrics();
            }
            Err(e) => {
                state.users.fail_load();
                state.report_transport_error("Failed to load customers", &e);
            }
        }
    }

    fn handle_product_created(&mut self, epoch: SessionEpoch, result: Result<Product, TransportError>) {
        let mut guard = self.state.write();
        let state = &mut *guard;

        // Pending previews go away either way.
        state.create_form.draft.discard_attachments(&mut state.previews);
        state.create_form.phase = Phase::Idle;

        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "ProductCreated", created = result.is_ok(), "Dropping result from an ended session");
            // The product exists server side; a resubmit would duplicate it.
            if result.is_ok() {
                state.create_form = Default::default();
            }
            return;
        }

        match result {
            Ok(product) => {
                tracing::info!(product_id = %product.id, "Product created");
                state.products.apply_create(product);
                state.create_form = Default::default();
                state.notifications.success("Product created successfully");
            }
            Err(e) => {
                state.create_form.error = Some(e.user_message());
                state.report_transport_error("Failed to create product", &e);
            }
        }
    }

    fn handle_product_updated(
        &mut self,
        epoch: SessionEpoch,
        product_id: String,
        image_sent: bool,
        result: Result<Product, TransportError>,
    ) {
        let mut guard = self.state.write();
        let state = &mut *guard;
        state.editor.phase = Phase::Idle;

        let editing_this = state
            .editor
            .slot
            .draft()
            .is_some_and(|draft| draft.product_id == product_id);

        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "ProductUpdated", product_id = %product_id, "Dropping result from an ended session");
            if editing_this {
                match result {
                    Ok(_) => state.editor.slot.clear(&mut state.previews),
                    Err(_) => {
                        if let Some(draft) = state.editor.slot.draft_mut() {
                            draft.discard_image(&mut state.previews);
                        }
                    }
                }
            }
            return;
        }

        match result {
            Ok(mut updated) => {
                // The server leaves images alone when none was uploaded.
                if !image_sent || updated.images.is_empty() {
                    if let Some(existing) = state.products.get(&product_id) {
                        updated.images = existing.images.clone();
                    }
                }

                if let Err(e) = state.products.apply_update(&product_id, updated) {
                    tracing::warn!(error = %e, "Updated product missing from store");
                    state
                        .notifications
                        .error(format!("Product updated, but the list is out of date: {}", e));
                } else {
                    tracing::info!(product_id = %product_id, image_sent, "Product updated");
                    state.notifications.success("Product updated successfully");
                }

                if editing_this {
                    state.editor.slot.clear(&mut state.previews);
                }
            }
            Err(e) => {
                if editing_this {
                    if let Some(draft) = state.editor.slot.draft_mut() {
                        draft.discard_image(&mut state.previews);
                    }
                    state.editor.error = Some(e.user_message());
                }
                state.report_transport_error("Failed to update product", &e);
            }
        }
    }

    fn handle_product_deleted(
        &mut self,
        epoch: SessionEpoch,
        product_id: String,
        result: Result<(), TransportError>,
    ) {
        let mut guard = self.state.write();
        let state = &mut *guard;

        // The confirm modal closes whatever the outcome.
        state.delete_confirm = Default::default();

        if !state.is_current_epoch(epoch) {
            tracing::debug!(event = "ProductDeleted", product_id = %product_id, "Dropping result from an ended session");
            return;
        }

        match result {
            Ok(()) => {
                if !state.products.apply_delete(&product_id) {
                    tracing::debug!(product_id = %product_id, "Deleted product was not in the store");
                }
                let editing_this = state
                    .editor
                    .slot
                    .draft()
                    .is_some_and(|draft| draft.product_id == product_id);
                if editing_this {
                    state.editor.slot.clear(&mut state.previews);
                }
                tracing::info!(product_id = %product_id, "Product deleted");
                state.notifications.success("Product deleted");
            }
            Err(e) => state.report_transport_error("Failed to delete product", &e),
        }
    }

    fn handle_user_orders_loaded(
        &mut self,
        user_id: String,
        token: RequestToken,
        result: Result<Vec<Order>, TransportError>,
    ) {
        let unauthorized = matches!(&result, Err(e) if e.is_unauthorized());

        let mut state = self.state.write();
        let resolution = state.drilldown.resolve(&user_id, token, result);
        if resolution == Resolution::Applied && unauthorized {
            state.expire_session();
        }
    }
}

/// Server message when it sent one, otherwise a generic failure.
fn login_error_message(error: &TransportError) -> String {
    match error {
        TransportError::ServerError { message, .. } if !message.is_empty() => message.clone(),
        TransportError::NetworkFailure(_) => error.to_string(),
        _ => LOGIN_FAILED.to_string(),
    }
}
