use crate::cart::CartError;
use crate::model::{Product, ProductId};
use serde::Serialize;

/// A line item in a [`Cart`](crate::cart::Cart): one product and how many of it.
///
/// The product is held by value, so a line keeps the price it was added at even if the
/// catalog entry is later replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// Creates a line item.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero or negative.
    pub fn new(product: Product, quantity: i32) -> Result<Self, CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        Ok(Self {
            product,
            quantity: quantity.unsigned_abs(),
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price() * f64::from(self.quantity)
    }

    /// Adds `amount` to the quantity. Returns `None`, leaving the line untouched, on overflow.
    pub(crate) fn increase(&mut self, amount: u32) -> Option<u32> {
        self.quantity = self.quantity.checked_add(amount)?;
        Some(self.quantity)
    }
}
