//! Order DTOs and status normalization.
//!
//! Status strings coming from the storefront are inconsistently cased
//! (`"pending"` from checkout, `"Pending"` from the admin tooling). They are
//! mapped once, while decoding, through [`STATUS_TABLE`]; nothing downstream
//! compares raw status strings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A related record that the storefront may or may not have populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Reference<T> {
    Populated(T),
    Id(String),
}

/// Records that carry their own storefront id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Reference<T> {
    /// Referenced id, whichever form arrived.
    pub fn id(&self) -> &str {
        match self {
            Reference::Populated(record) => record.id(),
            Reference::Id(id) => id,
        }
    }

    /// Populated record, if the server expanded it.
    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Populated(record) => Some(record),
            Reference::Id(_) => None,
        }
    }
}

/// User fields the order endpoints populate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderCustomer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Identified for OrderCustomer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Product fields the order endpoints populate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Identified for ProductSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One line of an order.
///
/// `/order/all` populates `productId`, `/order/user/:id` populates `product`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        rename = "productId",
        alias = "product",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<Reference<ProductSummary>>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl OrderItem {
    /// Display name of the product, when populated.
    pub fn product_name(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(Reference::populated)
            .map(|p| p.name.as_str())
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Shipping address snapshot taken at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Normalized order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Pending,
    Processing,
    Confirmed,
    Cancelled,
    Delivered,
    /// Not in the table; the raw string is kept on [`OrderStatus`].
    Other,
}

/// Every spelling the storefront is known to emit.
pub const STATUS_TABLE: &[(&str, StatusKind)] = &[
    ("pending", StatusKind::Pending),
    ("Pending", StatusKind::Pending),
    ("processing", StatusKind::Processing),
    ("Processing", StatusKind::Processing),
    ("confirmed", StatusKind::Confirmed),
    ("Confirmed", StatusKind::Confirmed),
    ("cancelled", StatusKind::Cancelled),
    ("Cancelled", StatusKind::Cancelled),
    ("delivered", StatusKind::Delivered),
    ("Delivered", StatusKind::Delivered),
];

impl StatusKind {
    /// Look a raw wire string up in [`STATUS_TABLE`].
    pub fn from_wire(raw: &str) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(spelling, _)| *spelling == raw)
            .map(|(_, kind)| *kind)
            .unwrap_or(StatusKind::Other)
    }
}

/// Order status as received, plus its normalized kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct OrderStatus {
    raw: String,
    kind: StatusKind,
}

impl OrderStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = StatusKind::from_wire(&raw);
        Self { raw, kind }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// String exactly as the storefront sent it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::new(raw)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.raw
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A storefront order. Read-only from the console.
///
/// `total_amount` is server-computed and is not checked against
/// `subtotal + tax_amount + shipping_charges`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference<OrderCustomer>>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(rename = "gstAmount", default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub shipping_charges: f64,
    #[serde(default)]
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

/// `GET /order/all` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /order/user/:id` answers either `{ orders: [...] }` or a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OrdersPayload {
    Wrapped { orders: Vec<Order> },
    Bare(Vec<Order>),
}

impl OrdersPayload {
    pub fn into_vec(self) -> Vec<Order> {
        match self {
            OrdersPayload::Wrapped { orders } => orders,
            OrdersPayload::Bare(orders) => orders,
        }
    }
}
