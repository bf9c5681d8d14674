//! # Product Manager
//!
//! This module owns the catalog: the set of [`Product`]s a cart may draw from.
//!
//! ## Overview
//!
//! [`ProductManager`] is a cheap, cloneable handle. Every clone points at the same
//! `ResourceStore<Product>`, which is how a [`Cart`](crate::cart::Cart) sees catalog changes
//! made after it was created without the catalog being a global.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//!
//! ## Usage
//!
//! ```rust
//! use shop_recipe::model::{Product, ProductId};
//! use shop_recipe::product_manager::{ProductError, ProductManager};
//!
//! let catalog = ProductManager::new();
//! catalog.add_product(Product::new(ProductId(1), "Laptop", 75000.0)?)?;
//!
//! // A second product with the same id is refused, the first one stays.
//! let duplicate = catalog.add_product(Product::new(ProductId(1), "Tablet", 30000.0)?);
//! assert_eq!(duplicate, Err(ProductError::AlreadyExists(ProductId(1))));
//! assert_eq!(catalog.find_product(ProductId(1)).unwrap().name(), "Laptop");
//! # Ok::<(), ProductError>(())
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{FrameworkError, ResourceStore};
use crate::model::{Product, ProductId};
use crate::reporting::{default_reporter, SharedReporter, ShopEvent};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Handle to a shared catalog.
#[derive(Clone)]
pub struct ProductManager {
    catalog: Rc<RefCell<ResourceStore<Product>>>,
    reporter: SharedReporter,
}

impl Default for ProductManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProductManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductManager")
            .field("products", &self.len())
            .finish_non_exhaustive()
    }
}

impl ProductManager {
    /// Creates an empty catalog that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_reporter(default_reporter())
    }

    pub fn with_reporter(reporter: SharedReporter) -> Self {
        Self {
            catalog: Rc::new(RefCell::new(ResourceStore::new())),
            reporter,
        }
    }

    /// The reporter this catalog announces through. Carts built on the catalog share it.
    pub fn reporter(&self) -> SharedReporter {
        Rc::clone(&self.reporter)
    }

    /// Adds a product unless its id is already taken.
    ///
    /// A duplicate is a soft conflict: it is reported, returned as
    /// [`ProductError::AlreadyExists`], and the existing entry is kept.
    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    pub fn add_product(&self, product: Product) -> Result<ProductId, ProductError> {
        let product_id = product.id();
        let name = product.name().to_string();

        let inserted = self.catalog.borrow_mut().insert(product);
        match inserted {
            Ok(id) => {
                self.reporter.report(ShopEvent::ProductAdded { product_id: id, name });
                Ok(id)
            }
            Err(FrameworkError::EntityError(e)) => Err(e),
            Err(FrameworkError::AlreadyExists(_) | FrameworkError::NotFound(_)) => {
                self.reporter.report(ShopEvent::DuplicateProduct { product_id });
                Err(ProductError::AlreadyExists(product_id))
            }
        }
    }

    /// Removes the product with this id. Absent ids are ignored silently.
    pub fn remove_product(&self, product_id: ProductId) -> Option<Product> {
        let removed = self.catalog.borrow_mut().remove(&product_id);
        if removed.is_some() {
            self.reporter.report(ShopEvent::ProductRemoved { product_id });
        }
        removed
    }

    /// Looks a product up by id. Never fails; a miss is `None`.
    pub fn find_product(&self, id: ProductId) -> Option<Product> {
        self.catalog.borrow().get(&id).cloned()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.catalog.borrow().contains(&id)
    }

    /// All products in the order they were added.
    ///
    /// Reports `CatalogEmpty` for an empty catalog and `CatalogListed` otherwise.
    pub fn list_products(&self) -> Vec<Product> {
        let products: Vec<Product> = self.catalog.borrow().iter().cloned().collect();
        debug!(count = products.len(), "list_products called");

        let event = if products.is_empty() {
            ShopEvent::CatalogEmpty
        } else {
            ShopEvent::CatalogListed { count: products.len() }
        };
        self.reporter.report(event);
        products
    }

    pub fn len(&self) -> usize {
        self.catalog.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::mock::RecordingReporter;

    fn recorded() -> (ProductManager, Rc<RecordingReporter>) {
        let recorder = Rc::new(RecordingReporter::new());
        (ProductManager::with_reporter(recorder.clone()), recorder)
    }

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product::new(ProductId(id), name, price).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let (catalog, recorder) = recorded();

        let id = catalog.add_product(product(1, "Laptop", 75000.0)).unwrap();

        assert_eq!(id, ProductId(1));
        assert_eq!(catalog.find_product(ProductId(1)), Some(product(1, "Laptop", 75000.0)));
        assert_eq!(catalog.find_product(ProductId(2)), None);
        recorder.assert_emitted(&ShopEvent::ProductAdded {
            product_id: ProductId(1),
            name: "Laptop".to_string(),
        });
    }

    #[test]
    fn test_duplicate_is_soft_conflict() {
        let (catalog, recorder) = recorded();
        catalog.add_product(product(1, "Laptop", 75000.0)).unwrap();

        let result = catalog.add_product(product(1, "Tablet", 30000.0));

        assert_eq!(result, Err(ProductError::AlreadyExists(ProductId(1))));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_product(ProductId(1)).unwrap().name(), "Laptop");
        assert_eq!(
            recorder.last(),
            Some(ShopEvent::DuplicateProduct { product_id: ProductId(1) })
        );
    }

    #[test]
    fn test_remove_absent_is_silent() {
        let (catalog, recorder) = recorded();
        catalog.add_product(product(1, "Laptop", 75000.0)).unwrap();
        recorder.take();

        assert!(catalog.remove_product(ProductId(9)).is_none());
        assert!(recorder.events().is_empty());

        assert!(catalog.remove_product(ProductId(1)).is_some());
        assert!(catalog.is_empty());
        recorder.assert_emitted(&ShopEvent::ProductRemoved { product_id: ProductId(1) });
    }

    #[test]
    fn test_list_reports_empty_distinctly() {
        let (catalog, recorder) = recorded();

        assert!(catalog.list_products().is_empty());
        assert_eq!(recorder.last(), Some(ShopEvent::CatalogEmpty));

        catalog.add_product(product(2, "Phone", 45000.0)).unwrap();
        catalog.add_product(product(1, "Laptop", 75000.0)).unwrap();
        let ids: Vec<_> = catalog.list_products().iter().map(Product::id).collect();

        assert_eq!(ids, vec![ProductId(2), ProductId(1)]);
        assert_eq!(recorder.last(), Some(ShopEvent::CatalogListed { count: 2 }));
    }

    #[test]
    fn test_clones_share_the_catalog() {
        let (catalog, _) = recorded();
        let handle = catalog.clone();

        catalog.add_product(product(3, "Headphones", 5000.0)).unwrap();

        assert!(handle.contains(ProductId(3)));
    }
}
