//! # Authentication Handlers
//!
//! Handlers for admin login and logout.

use crate::app::events::AppEvent;
use crate::app::draft::Phase;
use crate::app::state::AppState;
use crate::core::error::AppError;
use crate::utils::validation::{require_text, validate_email, ValidationErrors};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Update the login form fields
///
/// Internal handler function - use [`crate::app::App::set_login_credentials`] instead.
pub(crate) fn set_credentials(state: Arc<RwLock<AppState>>, email: String, password: String) {
    let mut state = state.write();
    state.login.email = email;
    state.login.password = password;
}

/// Handle login submit
///
/// Internal handler function - use [`crate::app::App::submit_login`] instead.
pub(crate) fn submit_login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> Result<(), AppError> {
    let (api_client, email, password) = {
        let mut state = state.write();
        if state.login.phase.is_submitting() {
            return Err(AppError::Busy("login"));
        }

        let mut errors = ValidationErrors::new();
        let email = errors.check(validate_email(&state.login.email));
        let password = errors.check(require_text("password", &state.login.password));
        let (Some(email), Some(password)) = (email, password) else {
            state.login.error = Some(errors.to_string());
            return Err(AppError::Validation(errors));
        };

        state.login.phase = Phase::Submitting;
        state.login.error = None;
        (state.api_client.clone(), email, password)
    };

    tracing::info!(email = %email, "Submitting admin login");
    tokio::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
    Ok(())
}

/// Handle logout
///
/// The local session is cleared when the call resolves, whatever its outcome.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn logout(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    tokio::spawn(async move {
        let result = api_client.logout().await;
        let _ = event_tx.send(AppEvent::LogoutResult(result)).await;
    });
}
