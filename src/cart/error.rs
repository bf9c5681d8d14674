//! Error types for the Cart.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The quantity is zero or negative.
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i32),

    /// The product id does not resolve in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart holds no line for this product.
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// Adding to the existing line would overflow its quantity.
    #[error("Quantity overflow for {0}")]
    QuantityOverflow(ProductId),
}
