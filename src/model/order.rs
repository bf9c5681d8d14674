//! Represents a submitted customer order.
//!
//! # Store Framework
//! [`Order`] implements the [`Entity`](crate::framework::Entity) trait,
//! allowing it to be kept in a [`ResourceStore`](crate::framework::ResourceStore)
//! owned by the [`OrderManager`](crate::order_manager::OrderManager).
//!
//! See the `Entity` impl on [`Order`] for details on:
//! - Insert validation (an order must carry at least one line)
//! - Update parameters ([`StatusChange`])
use crate::model::{CartItem, ProductId};
use crate::order_manager::{OrderError, TransitionPolicy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// The upper-case names are the stable external representation, used by `Display`,
/// `FromStr` and serde alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrderError::UnknownStatus(s.to_string()))
    }
}

/// One line of an order snapshot.
///
/// Copied out of the cart by value at submission time; later catalog or cart changes
/// never reach it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id(),
            name: item.product().name().to_string(),
            unit_price: item.product().price(),
            quantity: item.quantity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

/// Payload for changing an order's status.
///
/// The policy travels with the request so the entity can check the transition itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub policy: TransitionPolicy,
}

impl Order {
    /// Creates a new Order from a snapshot of cart lines.
    ///
    /// # Arguments
    /// * `id` - Identifier handed out by the order store
    /// * `items` - Cart lines to copy into the order
    ///
    /// # Notes
    /// The order starts in [`OrderStatus::Preparing`].
    pub fn new(id: OrderId, items: &[CartItem]) -> Self {
        Self {
            id,
            items: items.iter().map(OrderItem::from).collect(),
            status: OrderStatus::Preparing,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Sum of `unit_price × quantity` over the snapshot. Computed on every call.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
