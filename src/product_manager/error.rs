//! Error types for the catalog.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The price is zero, negative or not a number. Raised by `Product::new`.
    #[error("Invalid price: {0} (must be greater than zero)")]
    InvalidPrice(f64),

    /// A product with the same id is already in the catalog.
    #[error("Product already exists: {0}")]
    AlreadyExists(ProductId),
}
