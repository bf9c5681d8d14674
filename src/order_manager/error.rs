//! Error types for the Order manager.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An order needs at least one line.
    #[error("Cannot create order: cart is empty")]
    EmptyCart,

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The active transition policy forbids this status change.
    #[error("Illegal status transition for {id}: {from} -> {to}")]
    IllegalTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The order store refused the operation for a reason other than the order itself.
    #[error("Order store error: {0}")]
    StoreError(String),

    /// A status name outside the fixed vocabulary.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}
