//! # Authentication Endpoints
//!
//! Login and logout. The session is a cookie held by the client's cookie store.

use reqwest::Method;
use shared::{LoginRequest, LoginResponse};

use super::client::{decode, server_error, ApiClient, RequestBody};
use crate::core::error::TransportError;

/// Login with email and password.
///
/// A rejected login is reported as `ServerError` carrying the server's
/// message, including on 401, so the form can show why.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<LoginResponse, TransportError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let body = RequestBody::json(&LoginRequest { email, password })?;
    let response = client.send(Method::POST, "/auth/login", body).await?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = decode::<LoginResponse>(response).await;
        if let Ok(ref login) = result {
            tracing::info!(
                duration_ms = duration.as_millis(),
                role = ?login.user.role,
                "Login accepted by server"
            );
        }
        result
    } else {
        let body = response.text().await.unwrap_or_default();
        let error = server_error(status, &body);
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(error)
    }
}

/// End the server-side session.
pub async fn logout(client: &ApiClient) -> Result<(), TransportError> {
    client
        .request(Method::POST, "/auth/logout", RequestBody::Empty)
        .await?;
    tracing::info!("Logged out");
    Ok(())
}
