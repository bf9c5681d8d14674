//! Read-only rendering of orders.

use crate::model::{Order, OrderId, OrderItem, OrderStatus};
use serde::Serialize;
use std::fmt::Display;

/// Snapshot of one order for display: id, status, lines and total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub status: OrderStatus,
    pub lines: Vec<OrderItem>,
    pub total: f64,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            status: order.status(),
            lines: order.items().to_vec(),
            total: order.total_price(),
        }
    }
}

impl Display for OrderView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Order #{} [{}]", self.id.0, self.status)?;
        for line in &self.lines {
            writeln!(
                f,
                "  {} x{} @ {:.2} = {:.2}",
                line.name,
                line.quantity,
                line.unit_price,
                line.subtotal()
            )?;
        }
        writeln!(f, "  Total: {:.2}", self.total)
    }
}
