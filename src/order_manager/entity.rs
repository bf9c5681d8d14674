//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceStore`].
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::OrderError;
use crate::framework::Entity;
use crate::model::{Order, OrderId, StatusChange};

impl Entity for Order {
    type Id = OrderId;
    type Update = StatusChange;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        Order::id(self)
    }

    /// Refuses an order without lines.
    fn on_insert(&self) -> Result<(), OrderError> {
        if self.items().is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(())
    }

    /// Moves the order to `change.status` if `change.policy` allows it.
    /// A refused change leaves the status as it was.
    fn on_update(&mut self, change: StatusChange) -> Result<(), OrderError> {
        let from = self.status();
        if !change.policy.allows(from, change.status) {
            return Err(OrderError::IllegalTransition {
                id: Order::id(self),
                from,
                to: change.status,
            });
        }
        self.set_status(change.status);
        Ok(())
    }
}
