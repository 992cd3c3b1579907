//! # Application State Types
//!
//! Everything the shell reads: current screen, session, entity stores,
//! workflow forms, the drill-down panel, dashboard metrics and
//! notifications.

use std::sync::Arc;

use shared::{Order, Product, User};

use crate::app::aggregate::DashboardMetrics;
use crate::app::draft::{CreateForm, DeleteConfirm, Editor, Phase, PreviewRegistry};
use crate::app::drilldown::DrillDown;
use crate::app::notifications::Notifications;
use crate::app::store::{EntityStore, ViewMode};
use crate::core::error::TransportError;
use crate::core::service::ApiService;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Admin login form
    Login,
    /// Metrics, status tally and recent orders
    Dashboard,
    /// Create and manage products
    Products,
    /// All orders
    Orders,
    /// Customer list and per-customer order history
    Customers,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Login,
            Screen::Dashboard,
            Screen::Products,
            Screen::Orders,
            Screen::Customers,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Admin Login",
            Screen::Dashboard => "Dashboard",
            Screen::Products => "Products",
            Screen::Orders => "Orders",
            Screen::Customers => "Customers",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Tabs of the products screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTab {
    #[default]
    Create,
    Manage,
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub phase: Phase,
}

/// The signed-in admin. The credential itself is the HTTP client's cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

/// Generation of the signed-in session.
///
/// Bumped every time the session is cleared. Requests record the epoch they
/// were issued under; a result whose epoch no longer matches belongs to a
/// session that is gone and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Main application state
pub struct AppState {
    /// API client
    pub api_client: Arc<dyn ApiService>,
    /// Current active screen
    pub current_screen: Screen,
    pub login: LoginForm,
    /// Present once an admin has logged in
    pub session: Option<Session>,
    pub session_epoch: SessionEpoch,
    pub products: EntityStore<Product>,
    pub orders: EntityStore<Order>,
    pub users: EntityStore<User>,
    pub product_tab: ProductTab,
    pub product_search: String,
    pub create_form: CreateForm,
    pub editor: Editor,
    pub delete_confirm: DeleteConfirm,
    pub customer_search: String,
    pub customer_view: ViewMode,
    pub drilldown: DrillDown,
    /// Last computed dashboard snapshot
    pub dashboard: Option<DashboardMetrics>,
    /// Live image preview handles
    pub previews: PreviewRegistry,
    pub notifications: Notifications,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>) -> Self {
        Self {
            api_client,
            current_screen: Screen::Login,
            login: LoginForm::default(),
            session: None,
            session_epoch: SessionEpoch::default(),
            products: EntityStore::new(),
            orders: EntityStore::new(),
            users: EntityStore::new(),
            product_tab: ProductTab::default(),
            product_search: String::new(),
            create_form: CreateForm::default(),
            editor: Editor::default(),
            delete_confirm: DeleteConfirm::default(),
            customer_search: String::new(),
            customer_view: ViewMode::default(),
            drilldown: DrillDown::default(),
            dashboard: None,
            previews: PreviewRegistry::default(),
            notifications: Notifications::default(),
        }
    }

    /// Check if an admin session is present
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// True when a result requested under `epoch` still belongs to this session.
    pub fn is_current_epoch(&self, epoch: SessionEpoch) -> bool {
        self.session_epoch == epoch
    }

    /// Customers matching the search box
    pub fn filtered_users(&self) -> Vec<&User> {
        self.users.filter(&self.customer_search)
    }

    /// Products matching the manage tab's search box
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.products.filter(&self.product_search)
    }

    /// Rebuild the dashboard snapshot once both sources have loaded.
    pub fn refresh_dashboard_metrics(&mut self) {
        if !(self.orders.is_loaded() && self.users.is_loaded()) {
            return;
        }
        let metrics = DashboardMetrics::compute(self.orders.items(), self.users.items());
        tracing::debug!(
            total_orders = metrics.total_orders,
            total_customers = metrics.total_customers,
            revenue = metrics.revenue,
            "Dashboard metrics recomputed"
        );
        self.dashboard = Some(metrics);
    }

    /// Drop the session and everything loaded under it.
    ///
    /// Form drafts survive so a re-login can resubmit them.
    pub fn clear_session(&mut self) {
        self.session = None;
        self.session_epoch = self.session_epoch.next();
        self.products.clear();
        self.orders.clear();
        self.users.clear();
        self.dashboard = None;
        self.drilldown.close();
        self.delete_confirm.target = None;
        self.login.password.clear();
        self.login.phase = Phase::Idle;
        self.current_screen = Screen::Login;
    }

    /// Tear down every draft and release its previews.
    pub fn reset_forms(&mut self) {
        self.editor.slot.clear(&mut self.previews);
        self.editor = Editor::default();
        self.create_form.draft.discard_attachments(&mut self.previews);
        self.create_form = CreateForm::default();
        self.delete_confirm = DeleteConfirm::default();
    }

    /// The server no longer accepts our cookie: back to the login screen.
    pub fn expire_session(&mut self) {
        tracing::warn!(screen = ?self.current_screen, "Session rejected by server, redirecting to login");
        self.clear_session();
        self.login.error = Some("Session expired. Please log in again.".to_string());
    }

    /// Surface a transport failure. `Unauthorized` also ends the session.
    pub fn report_transport_error(&mut self, context: &str, error: &TransportError) {
        if error.is_unauthorized() {
            self.expire_session();
            return;
        }
        tracing::warn!(context = context, error = %error, "Request failed");
        self.notifications
            .error(format!("{}: {}", context, error.user_message()));
    }
}
