//! Entity trait implementation for the Product domain type.
//!
//! Products are immutable once built, so the update payload is uninhabited: the store
//! can hold products but no caller can ever construct an update for one.

use super::ProductError;
use crate::framework::Entity;
use crate::model::{Product, ProductId};
use std::convert::Infallible;

impl Entity for Product {
    type Id = ProductId;
    type Update = Infallible;
    type Error = ProductError;

    fn id(&self) -> ProductId {
        Product::id(self)
    }

    fn on_update(&mut self, update: Infallible) -> Result<(), ProductError> {
        match update {}
    }
}
