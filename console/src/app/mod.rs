//! # Application Orchestrator
//!
//! The [`App`] struct coordinates shell actions, background requests and
//! state reconciliation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Control Thread (shell)                     │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains pending results                │   │
//! │  │  - submit_*() / navigate() - user actions            │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - stores, forms, drill-down, dashboard snapshot     │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks: fetch_products / fetch_orders / fetch_users       │
//! │  - handlers: login, create/update/delete, view_orders       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Background tasks never write to the stores. They send an [`AppEvent`],
//! and the event handler applies it on the control thread. A store therefore
//! only changes after the server has acknowledged the operation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use console::app::{App, Screen};
//! use console::services::api::ApiClient;
//!
//! # async fn run() -> console::core::Result<()> {
//! let api = Arc::new(ApiClient::new("http://localhost:8000/api")?);
//! let mut app = App::with_service(api);
//!
//! app.set_login_credentials("admin@cultures.in", "secret");
//! app.submit_login()?;
//!
//! // Apply results as they arrive
//! while app.process_next_event().await {
//!     if app.state.read().dashboard.is_some() {
//!         break;
//!     }
//! }
//! assert_eq!(app.state.read().current_screen, Screen::Dashboard);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod draft;
pub mod drilldown;
mod event_handler;
mod events;
mod handlers;
pub mod notifications;
mod state;
pub mod store;
mod tasks;
#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::{DashboardMetrics, StatusTally};
pub use draft::{
    CreateForm, DeleteConfirm, DeleteTarget, EditDraft, Editor, EditorSlot, PendingImage, Phase,
    Preview, PreviewHandle, PreviewRegistry, ProductDraft,
};
pub use drilldown::{DrillDown, DrillDownPanel, RequestToken, Resolution};
pub use events::AppEvent;
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use state::*;
pub use store::{Entity, EntityStore, Searchable, StoreError, ViewMode};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::{ApiClient, Attachment};

/// Main application orchestrator.
///
/// Actions run on the caller's thread and return immediately; their network
/// calls are spawned on the Tokio runtime, so every action that talks to the
/// server must be called from within one.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks briefly: use `read()` to render, never keep a guard across
    /// an action call.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create an application talking to the storefront at `config.api_base_url`.
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let client = ApiClient::new(config.api_base_url.as_str())?;
        tracing::info!(base_url = %client.base_url(), "API client ready");
        Ok(Self::with_service(Arc::new(client)))
    }

    /// Create an application over any [`ApiService`] implementation.
    pub fn with_service(api_client: Arc<dyn ApiService>) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::new(api_client))),
            event_rx,
            event_tx,
        }
    }

    /// Apply every result that has already arrived (non-blocking).
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed events");
        }
        processed
    }

    /// Wait for the next result and apply it.
    ///
    /// Returns false once the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // --- Session -------------------------------------------------------

    pub fn set_login_credentials(&self, email: impl Into<String>, password: impl Into<String>) {
        handlers::auth::set_credentials(self.state.clone(), email.into(), password.into());
    }

    /// Submit the login form. Only `admin` accounts are let in.
    pub fn submit_login(&self) -> Result<()> {
        handlers::auth::submit_login(self.state.clone(), self.event_tx.clone())
    }

    pub fn logout(&self) {
        handlers::auth::logout(self.state.clone(), self.event_tx.clone());
    }

    // --- Navigation ----------------------------------------------------

    /// Switch screens and start the loads the screen needs.
    pub fn navigate(&self, screen: Screen) {
        handlers::navigation::navigate(self.state.clone(), self.event_tx.clone(), screen);
    }

    pub fn set_product_tab(&self, tab: ProductTab) {
        handlers::navigation::set_product_tab(self.state.clone(), tab);
    }

    pub fn refresh_dashboard(&self) {
        tasks::dashboard::refresh_dashboard(self.state.clone(), self.event_tx.clone());
    }

    pub fn refresh_products(&self) {
        tasks::catalog::fetch_products(self.state.clone(), self.event_tx.clone());
    }

    pub fn refresh_orders(&self) {
        tasks::dashboard::fetch_orders(self.state.clone(), self.event_tx.clone());
    }

    pub fn refresh_users(&self) {
        tasks::dashboard::fetch_users(self.state.clone(), self.event_tx.clone());
    }

    // --- Create --------------------------------------------------------

    /// Edit the create draft in place.
    pub fn edit_create_draft<F>(&self, change: F)
    where
        F: FnOnce(&mut ProductDraft),
    {
        let mut state = self.state.write();
        change(&mut state.create_form.draft);
    }

    /// Attach image files to the create draft and return their previews.
    pub fn select_create_images(&self, attachments: Vec<Attachment>) -> Vec<PreviewHandle> {
        handlers::products::select_create_images(self.state.clone(), attachments)
    }

    pub fn remove_create_image(&self, handle: PreviewHandle) -> bool {
        handlers::products::remove_create_image(self.state.clone(), handle)
    }

    /// Validate and submit the create form.
    pub fn submit_create(&self) -> Result<()> {
        handlers::products::submit_create(self.state.clone(), self.event_tx.clone())
    }

    // --- Edit ----------------------------------------------------------

    pub fn begin_edit(&self, product_id: &str) -> Result<()> {
        handlers::products::begin_edit(self.state.clone(), product_id)
    }

    pub fn edit_draft<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut EditDraft),
    {
        handlers::products::edit_draft(self.state.clone(), change)
    }

    pub fn select_edit_image(&self, attachment: Attachment) -> Result<PreviewHandle> {
        handlers::products::select_edit_image(self.state.clone(), attachment)
    }

    pub fn cancel_edit(&self) {
        handlers::products::cancel_edit(self.state.clone());
    }

    pub fn submit_edit(&self) -> Result<()> {
        handlers::products::submit_edit(self.state.clone(), self.event_tx.clone())
    }

    // --- Delete --------------------------------------------------------

    pub fn request_delete(&self, product_id: impl Into<String>, name: impl Into<String>) -> Result<()> {
        handlers::products::request_delete(self.state.clone(), product_id.into(), name.into())
    }

    pub fn cancel_delete(&self) {
        handlers::products::cancel_delete(self.state.clone());
    }

    /// Delete the targeted product. `Ok(false)` when nothing is targeted.
    pub fn confirm_delete(&self) -> Result<bool> {
        handlers::products::confirm_delete(self.state.clone(), self.event_tx.clone())
    }

    // --- Customers -----------------------------------------------------

    pub fn set_customer_search(&self, query: impl Into<String>) {
        handlers::customers::set_search(self.state.clone(), query.into());
    }

    pub fn set_customer_view(&self, view: ViewMode) {
        handlers::customers::set_view(self.state.clone(), view);
    }

    /// Open the order history of one customer.
    pub fn view_orders(&self, user_id: impl Into<String>) -> RequestToken {
        handlers::customers::view_orders(self.state.clone(), self.event_tx.clone(), user_id.into())
    }

    pub fn close_orders(&self) {
        handlers::customers::close_orders(self.state.clone());
    }

    // --- Notifications -------------------------------------------------

    pub fn dismiss_notification(&self, id: Uuid) -> bool {
        self.state.write().notifications.dismiss(id)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{order, product, user, MockApi};
    use super::*;
    use crate::core::error::{AppError, TransportError};
    use std::time::Duration;

    async fn next_event(app: &mut App) {
        let received = tokio::time::timeout(Duration::from_secs(2), app.process_next_event())
            .await
            .expect("timed out waiting for event");
        assert!(received);
    }

    fn signed_in(api: Arc<MockApi>) -> App {
        let app = App::with_service(api);
        {
            let mut state = app.state.write();
            state.session = Some(Session {
                user: user("admin-1", "Admin", "admin@cultures.in", Some("admin")),
            });
        }
        app
    }

    async fn with_catalog(api: Arc<MockApi>) -> App {
        let mut app = signed_in(api);
        app.navigate(Screen::Products);
        next_event(&mut app).await;
        app
    }

    fn fill_draft(draft: &mut ProductDraft) {
        draft.name = "Block Print Kurta".to_string();
        draft.description = "Hand block printed".to_string();
        draft.price = "1499".to_string();
        draft.category = "women".to_string();
        draft.stock = "8".to_string();
        draft.sizes = "S, M, L".to_string();
    }

    fn png(name: &str) -> Attachment {
        Attachment::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    #[tokio::test]
    async fn create_appends_server_product() {
        let api = MockApi::with_catalog(vec![product("p1", "Tee", &["https://cdn/tee.jpg"])]);
        let mut app = with_catalog(api.clone()).await;
        assert_eq!(app.state.read().products.len(), 1);

        app.edit_create_draft(fill_draft);
        app.submit_create().unwrap();
        assert!(app.state.read().create_form.phase.is_submitting());
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.products.len(), 2);
        assert!(state.products.contains("srv-1"));
        assert_eq!(state.products.get("srv-1").unwrap().sizes, vec!["S", "M", "L"]);
        assert_eq!(state.create_form.phase, Phase::Idle);
        assert!(state.create_form.draft.name.is_empty());
        assert_eq!(state.create_form.draft.brand, "Culture's");
        assert_eq!(
            state.notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[tokio::test]
    async fn negative_price_never_reaches_server() {
        let api = MockApi::new();
        let app = signed_in(api.clone());

        app.edit_create_draft(|draft| {
            fill_draft(draft);
            draft.price = "-5".to_string();
        });
        let err = app.submit_create().unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(api.total_calls(), 0);
        let state = app.state.read();
        assert_eq!(
            state.create_form.errors.for_field("price"),
            Some("Price cannot be negative")
        );
        assert_eq!(state.create_form.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        app.edit_create_draft(fill_draft);

        app.submit_create().unwrap();
        assert!(matches!(app.submit_create(), Err(AppError::Busy(_))));

        next_event(&mut app).await;
        assert_eq!(api.call_count("create_product"), 1);
        assert_eq!(app.state.read().products.len(), 1);
    }

    #[tokio::test]
    async fn failed_create_keeps_text_and_releases_previews() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        app.edit_create_draft(fill_draft);
        app.select_create_images(vec![png("front.png"), png("back.png")]);
        assert_eq!(app.state.read().previews.live_count(), 2);

        api.fail_next(TransportError::ServerError {
            status: 500,
            message: "Upload failed".to_string(),
        });
        app.submit_create().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.previews.live_count(), 0);
        assert_eq!(state.create_form.draft.name, "Block Print Kurta");
        assert_eq!(state.create_form.error.as_deref(), Some("Upload failed"));
        assert!(state.products.is_empty());
        assert_eq!(
            state.notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[tokio::test]
    async fn create_with_images_uploads_them() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        app.edit_create_draft(fill_draft);
        let handles = app.select_create_images(vec![png("front.png"), png("back.png")]);
        assert!(app.remove_create_image(handles[1]));

        app.submit_create().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(
            state.products.get("srv-1").unwrap().images,
            vec!["https://cdn/front.png"]
        );
        assert_eq!(state.previews.live_count(), 0);
    }

    #[tokio::test]
    async fn delete_removes_only_after_acknowledgement() {
        let api = MockApi::with_catalog(vec![
            product("p1", "Tee", &[]),
            product("p2", "Scarf", &[]),
        ]);
        let mut app = with_catalog(api.clone()).await;

        app.request_delete("p1", "Tee").unwrap();
        assert!(app.confirm_delete().unwrap());
        {
            let state = app.state.read();
            assert!(state.products.contains("p1"));
            assert!(state.delete_confirm.phase.is_submitting());
        }

        next_event(&mut app).await;
        let state = app.state.read();
        assert!(!state.products.contains("p1"));
        assert!(state.products.contains("p2"));
        assert!(!state.delete_confirm.is_open());
        assert_eq!(state.delete_confirm.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn confirm_without_target_is_a_no_op() {
        let api = MockApi::new();
        let app = signed_in(api.clone());
        assert!(!app.confirm_delete().unwrap());
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn failed_delete_keeps_entry_and_closes_confirm() {
        let api = MockApi::with_catalog(vec![product("p1", "Tee", &[])]);
        let mut app = with_catalog(api.clone()).await;

        app.request_delete("p1", "Tee").unwrap();
        api.fail_next(TransportError::NetworkFailure("connection reset".to_string()));
        app.confirm_delete().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        assert!(state.products.contains("p1"));
        assert!(!state.delete_confirm.is_open());
        assert_eq!(
            state.notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[tokio::test]
    async fn update_without_new_image_keeps_images() {
        let api = MockApi::with_catalog(vec![product(
            "p1",
            "Tee",
            &["https://cdn/a.jpg", "https://cdn/b.jpg"],
        )]);
        api.omit_images_on_update();
        let mut app = with_catalog(api.clone()).await;

        app.begin_edit("p1").unwrap();
        app.edit_draft(|draft| draft.price = "999".to_string()).unwrap();
        app.submit_edit().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        let updated = state.products.get("p1").unwrap();
        assert_eq!(updated.price, 999.0);
        assert_eq!(updated.images, vec!["https://cdn/a.jpg", "https://cdn/b.jpg"]);
        assert!(state.editor.slot.draft().is_none());
    }

    #[tokio::test]
    async fn update_with_new_image_replaces_images_and_revokes_preview() {
        let api = MockApi::with_catalog(vec![product("p1", "Tee", &["https://cdn/a.jpg"])]);
        let mut app = with_catalog(api.clone()).await;

        app.begin_edit("p1").unwrap();
        let handle = app.select_edit_image(png("new.png")).unwrap();
        {
            let state = app.state.read();
            assert!(state.previews.is_live(handle));
            assert_eq!(
                state.editor.slot.draft().map(|d| d.preview.clone()),
                Some(Preview::Local(handle))
            );
        }

        app.submit_edit().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.products.get("p1").unwrap().images, vec!["https://cdn/new.png"]);
        assert_eq!(state.previews.live_count(), 0);
    }

    #[tokio::test]
    async fn cancel_edit_releases_pending_image() {
        let api = MockApi::with_catalog(vec![product("p1", "Tee", &[])]);
        let app = with_catalog(api.clone()).await;

        app.begin_edit("p1").unwrap();
        app.select_edit_image(png("new.png")).unwrap();
        app.cancel_edit();

        let state = app.state.read();
        assert!(state.editor.slot.draft().is_none());
        assert_eq!(state.previews.live_count(), 0);
        assert_eq!(api.call_count("update_product"), 0);
    }

    #[tokio::test]
    async fn edit_of_unknown_product_is_a_store_error() {
        let app = signed_in(MockApi::new());
        assert!(matches!(
            app.begin_edit("missing"),
            Err(AppError::Store(StoreError::UnknownEntity { .. }))
        ));
    }

    #[tokio::test]
    async fn late_drilldown_response_does_not_replace_newer_panel() {
        let api = MockApi::new();
        api.user_orders
            .lock()
            .insert("A".to_string(), vec![order("a1", 10.0, "pending", 0)]);
        api.user_orders.lock().insert(
            "B".to_string(),
            vec![order("b1", 20.0, "Delivered", 0), order("b2", 5.0, "pending", 1)],
        );
        let gate_a = api.gate("A");
        let mut app = signed_in(api.clone());

        app.view_orders("A");
        app.view_orders("B");

        // B answers first, A is still held
        next_event(&mut app).await;
        gate_a.notify_one();
        next_event(&mut app).await;

        let state = app.state.read();
        let panel = state.drilldown.panel().unwrap();
        assert_eq!(panel.user_id, "B");
        assert_eq!(
            panel.orders.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            vec!["b1", "b2"]
        );
        assert_eq!(api.call_count("list_user_orders"), 2);
    }

    #[tokio::test]
    async fn unauthorized_load_returns_to_login() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        api.fail_next(TransportError::Unauthorized);

        app.navigate(Screen::Orders);
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        assert!(state.login.error.is_some());
    }

    #[tokio::test]
    async fn navigation_without_session_redirects_to_login() {
        let api = MockApi::new();
        let app = App::with_service(api.clone());
        app.navigate(Screen::Products);

        assert_eq!(app.state.read().current_screen, Screen::Login);
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn non_admin_login_is_denied() {
        let api = MockApi::new();
        api.login_as(user("u1", "Shopper", "shopper@mail.com", Some("user")));
        let mut app = App::with_service(api.clone());

        app.set_login_credentials("shopper@mail.com", "pw");
        app.submit_login().unwrap();
        next_event(&mut app).await;

        let state = app.state.read();
        assert!(state.session.is_none());
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(state.login.error.as_deref(), Some("Access denied! Admins only."));
    }

    #[tokio::test]
    async fn login_with_bad_email_sends_nothing() {
        let api = MockApi::new();
        let app = App::with_service(api.clone());
        app.set_login_credentials("not-an-email", "pw");

        assert!(matches!(app.submit_login(), Err(AppError::Validation(_))));
        assert_eq!(api.total_calls(), 0);
        assert!(app.state.read().login.error.is_some());
    }

    #[tokio::test]
    async fn admin_login_loads_dashboard_metrics() {
        let api = MockApi::new();
        *api.orders.lock() = vec![
            order("o1", 100.0, "Delivered", 0),
            order("o2", 250.0, "Pending", 5),
        ];
        *api.users.lock() = vec![user("u1", "Asha", "asha@shop.in", None)];
        let mut app = App::with_service(api.clone());

        app.set_login_credentials("admin@cultures.in", "secret");
        app.submit_login().unwrap();
        next_event(&mut app).await; // login
        next_event(&mut app).await; // first source
        assert!(app.state.read().dashboard.is_none());
        next_event(&mut app).await; // second source

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        let metrics = state.dashboard.as_ref().unwrap();
        assert_eq!(metrics.revenue, 350.0);
        assert_eq!(metrics.total_orders, 2);
        assert_eq!(metrics.total_customers, 1);
        assert_eq!(metrics.growth_rate, 20.0);
        assert_eq!(metrics.recent_orders[0].id, "o2");
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_call_fails() {
        let api = MockApi::with_catalog(vec![product("p1", "Tee", &[])]);
        let mut app = with_catalog(api.clone()).await;
        api.fail_next(TransportError::NetworkFailure("offline".to_string()));

        app.logout();
        next_event(&mut app).await;

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert!(state.products.is_empty());
        assert_eq!(state.current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn loads_resolving_after_logout_are_dropped() {
        let mut app = signed_in(MockApi::new());
        let epoch = {
            let mut state = app.state.write();
            assert!(state.products.begin_load());
            assert!(state.orders.begin_load());
            assert!(state.users.begin_load());
            state.session_epoch
        };

        app.handle_event(AppEvent::LogoutResult(Ok(())));
        app.handle_event(AppEvent::ProductsLoaded {
            epoch,
            result: Ok(vec![product("p1", "Tee", &[])]),
        });
        app.handle_event(AppEvent::OrdersLoaded {
            epoch,
            result: Ok(vec![order("o1", 100.0, "Delivered", 0)]),
        });
        app.handle_event(AppEvent::UsersLoaded {
            epoch,
            result: Ok(vec![user("u1", "Asha", "asha@shop.in", None)]),
        });

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert!(state.products.is_empty());
        assert!(state.orders.is_empty());
        assert!(state.users.is_empty());
        assert!(!state.products.is_loaded());
        assert!(state.dashboard.is_none());
    }

    #[tokio::test]
    async fn create_resolving_after_expiry_leaves_store_alone() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        app.edit_create_draft(fill_draft);
        app.submit_create().unwrap();
        app.state.write().expire_session();

        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(api.call_count("create_product"), 1);
        assert!(state.products.is_empty());
        assert_eq!(state.create_form.phase, Phase::Idle);
        assert!(state.create_form.draft.name.is_empty());
        assert_eq!(state.previews.live_count(), 0);
        assert_eq!(state.current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn customer_search_is_a_projection() {
        let api = MockApi::new();
        *api.users.lock() = vec![
            user("u1", "Asha Rao", "asha@shop.in", None),
            user("u2", "Vikram", "vik@mail.com", None),
        ];
        let mut app = signed_in(api);
        app.navigate(Screen::Customers);
        next_event(&mut app).await;

        app.set_customer_search("VIK");
        app.set_customer_view(ViewMode::List);
        let state = app.state.read();
        let ids: Vec<_> = state.filtered_users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["u2"]);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.customer_view, ViewMode::List);
    }

    #[tokio::test]
    async fn notifications_can_be_dismissed() {
        let api = MockApi::new();
        let mut app = signed_in(api.clone());
        api.fail_next(TransportError::NetworkFailure("offline".to_string()));
        app.refresh_products();
        next_event(&mut app).await;

        let id = app.state.read().notifications.latest().map(|n| n.id).unwrap();
        assert!(app.dismiss_notification(id));
        assert!(app.state.read().notifications.is_empty());
        assert!(!app.state.read().products.is_loading());
    }
}
