//! # Dashboard Aggregation
//!
//! Pure derivation of dashboard figures from the order and user
//! collections. There is no server-side aggregation endpoint; the snapshot is
//! rebuilt in full whenever either collection is reloaded.

use shared::{Order, StatusKind, User};

/// Number of orders shown in the "recent orders" panel
pub const RECENT_ORDER_LIMIT: usize = 5;

/// Ceiling for the growth-rate gauge
pub const GROWTH_RATE_CAP: f64 = 100.0;

/// Orders per normalized status. Statuses other than these three are not
/// counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub delivered: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl StatusTally {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders
            .iter()
            .fold(StatusTally::default(), |mut tally, order| {
                match order.status.kind() {
                    StatusKind::Delivered => tally.delivered += 1,
                    StatusKind::Pending => tally.pending += 1,
                    StatusKind::Cancelled => tally.cancelled += 1,
                    StatusKind::Processing | StatusKind::Confirmed | StatusKind::Other => {}
                }
                tally
            })
    }
}

/// Snapshot shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_orders: usize,
    pub total_customers: usize,
    pub revenue: f64,
    pub growth_rate: f64,
    pub recent_orders: Vec<Order>,
    pub status_tally: StatusTally,
}

impl DashboardMetrics {
    pub fn compute(orders: &[Order], users: &[User]) -> Self {
        Self {
            total_orders: orders.len(),
            total_customers: users.len(),
            revenue: revenue(orders),
            growth_rate: growth_rate(orders.len(), users.len()),
            recent_orders: recent_orders(orders, RECENT_ORDER_LIMIT),
            status_tally: StatusTally::from_orders(orders),
        }
    }
}

/// Sum of `total_amount` over all orders.
pub fn revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|order| order.total_amount).sum()
}

/// Orders-per-customer scaled by ten, rounded to one decimal and capped.
pub fn growth_rate(total_orders: usize, total_customers: usize) -> f64 {
    let ratio = total_orders as f64 / total_customers.max(1) as f64;
    let rounded = (ratio * 10.0 * 10.0).round() / 10.0;
    rounded.min(GROWTH_RATE_CAP)
}

/// Newest `limit` orders. Orders with equal timestamps keep their input order.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
