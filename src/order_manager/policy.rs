//! Order status transition rules.
//!
//! ```text
//!   Permissive: any status -> any status
//!
//!   Lifecycle:
//!                ┌───────────┐
//!                │ PREPARING │
//!                └─────┬─────┘
//!            ┌─────────┴─────────┐
//!            ▼                   ▼
//!      ┌──────────┐        ┌───────────┐
//!      │ SHIPPED  │───────►│ CANCELLED │
//!      └────┬─────┘        └───────────┘
//!           ▼                (terminal)
//!      ┌───────────┐
//!      │ DELIVERED │
//!      └───────────┘
//!       (terminal)
//! ```

use crate::model::OrderStatus;
use serde::Deserialize;

/// Which status changes `update_order_status` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may follow any status.
    #[default]
    Permissive,
    /// Only the forward lifecycle in the table below, with DELIVERED and CANCELLED terminal.
    Lifecycle,
}

impl TransitionPolicy {
    /// Statuses reachable from `from` in one step, excluding `from` itself.
    pub fn targets(&self, from: OrderStatus) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            TransitionPolicy::Permissive => match from {
                Preparing => &[Shipped, Delivered, Cancelled],
                Shipped => &[Preparing, Delivered, Cancelled],
                Delivered => &[Preparing, Shipped, Cancelled],
                Cancelled => &[Preparing, Shipped, Delivered],
            },
            TransitionPolicy::Lifecycle => match from {
                Preparing => &[Shipped, Cancelled],
                Shipped => &[Delivered, Cancelled],
                Delivered | Cancelled => &[],
            },
        }
    }

    /// Re-applying the current status is always allowed.
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        from == to || self.targets(from).contains(&to)
    }

    pub fn is_terminal(&self, status: OrderStatus) -> bool {
        self.targets(status).is_empty()
    }
}
