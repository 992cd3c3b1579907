//! # Order Endpoints
//!
//! Read-only order queries. Status strings are normalized while decoding
//! (see [`shared::dto::orders::STATUS_TABLE`]).

use reqwest::Method;
use shared::{Order, OrderListResponse, OrdersPayload, StatusKind};

use super::client::{decode, rejected, ApiClient, RequestBody};
use crate::core::error::TransportError;

/// Fetch every order in the store.
#[tracing::instrument(skip(client))]
pub async fn list_orders(client: &ApiClient) -> Result<Vec<Order>, TransportError> {
    let start = std::time::Instant::now();
    let response = client
        .request(Method::GET, "/order/all", RequestBody::Empty)
        .await?;
    let status = response.status();

    let body = decode::<OrderListResponse>(response).await?;
    if !body.success {
        return Err(rejected(status, body.message, "Failed to load orders"));
    }

    warn_unmapped_statuses(&body.orders);
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        order_count = body.orders.len(),
        "Orders fetched successfully"
    );
    Ok(body.orders)
}

/// Fetch the orders of one customer.
#[tracing::instrument(skip(client))]
pub async fn list_user_orders(client: &ApiClient, user_id: &str) -> Result<Vec<Order>, TransportError> {
    let url = client.url_with_segment("/order/user", user_id)?;
    let response = client.request_url(Method::GET, url, RequestBody::Empty).await?;
    let orders = decode::<OrdersPayload>(response).await?.into_vec();

    warn_unmapped_statuses(&orders);
    tracing::debug!(order_count = orders.len(), "User orders fetched");
    Ok(orders)
}

fn warn_unmapped_statuses(orders: &[Order]) {
    for order in orders.iter().filter(|o| o.status.kind() == StatusKind::Other) {
        tracing::warn!(order_id = %order.id, status = %order.status, "Unmapped order status");
    }
}
