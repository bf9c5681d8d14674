//! Represents a product in the catalog.
//!
//! # Store Framework
//! [`Product`] implements the [`Entity`](crate::framework::Entity) trait,
//! allowing it to be kept in a [`ResourceStore`](crate::framework::ResourceStore)
//! owned by the [`ProductManager`](crate::product_manager::ProductManager).
//!
//! A `Product` is a value object: the price is validated once in [`Product::new`]
//! and nothing can change it afterwards.
use crate::product_manager::ProductError;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog key, unique within a `ProductManager`
    /// * `name` - Product name
    /// * `price` - Unit price, must be a finite number greater than zero
    ///
    /// # Errors
    /// Returns [`ProductError::InvalidPrice`] when the price is zero, negative or NaN.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        if !(price.is_finite() && price > 0.0) {
            return Err(ProductError::InvalidPrice(price));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} - {:.2}", self.id.0, self.name, self.price)
    }
}
