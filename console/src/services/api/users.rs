//! # Customer Endpoints

use reqwest::Method;
use shared::{User, UsersPayload};

use super::client::{decode, ApiClient, RequestBody};
use crate::core::error::TransportError;

/// Fetch all customers (without their orders).
#[tracing::instrument(skip(client))]
pub async fn list_users(client: &ApiClient) -> Result<Vec<User>, TransportError> {
    let response = client
        .request(Method::GET, "/user/getusers", RequestBody::Empty)
        .await?;
    let users = decode::<UsersPayload>(response).await?.into_vec();
    tracing::debug!(user_count = users.len(), "Users fetched");
    Ok(users)
}
