//! # Cart
//!
//! A shopping session's line items, validated against a live catalog.
//!
//! ## Overview
//!
//! The cart holds a [`ProductManager`] handle rather than owning the catalog. Every
//! [`Cart::add_item`] resolves the product at call time, so a product removed from the
//! catalog can no longer be added, while lines already in the cart keep the product value
//! they were added with.
//!
//! ## Structure
//!
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`view`] - [`CartView`] rendering with per-line subtotals
//!
//! ## Usage
//!
//! ```rust
//! use shop_recipe::cart::{Cart, CartError};
//! use shop_recipe::model::{Product, ProductId};
//! use shop_recipe::product_manager::ProductManager;
//!
//! let catalog = ProductManager::new();
//! catalog.add_product(Product::new(ProductId(2), "Phone", 45000.0).unwrap()).unwrap();
//!
//! let mut cart = Cart::new(&catalog);
//! cart.add_item(ProductId(2), 1).unwrap();
//! cart.add_item(ProductId(2), 1).unwrap();
//! assert_eq!(cart.add_item(ProductId(2), 0), Err(CartError::InvalidQuantity(0)));
//!
//! assert_eq!(cart.quantity_of(ProductId(2)), Some(2));
//! assert_eq!(cart.total_price(), 90000.0);
//! ```

pub mod error;
pub mod view;

pub use error::*;
pub use view::*;

use crate::model::{CartItem, ProductId};
use crate::product_manager::ProductManager;
use crate::reporting::{SharedReporter, ShopEvent};
use tracing::{debug, instrument};

/// Line items for one shopping session, at most one per product id.
pub struct Cart {
    catalog: ProductManager,
    items: Vec<CartItem>,
    reporter: SharedReporter,
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Cart {
    /// Creates an empty cart that validates against `catalog` and reports through the
    /// catalog's reporter.
    pub fn new(catalog: &ProductManager) -> Self {
        Self::with_reporter(catalog, catalog.reporter())
    }

    pub fn with_reporter(catalog: &ProductManager, reporter: SharedReporter) -> Self {
        Self {
            catalog: catalog.clone(),
            items: Vec::new(),
            reporter,
        }
    }

    /// Adds `quantity` of a catalog product, merging into an existing line.
    ///
    /// Every failure is a soft condition: it is reported, returned, and the cart is left
    /// exactly as it was.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, product_id: ProductId, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            self.reporter.report(ShopEvent::InvalidQuantity { product_id, quantity });
            return Err(CartError::InvalidQuantity(quantity));
        }

        let Some(product) = self.catalog.find_product(product_id) else {
            self.reporter.report(ShopEvent::ProductNotFound { product_id });
            return Err(CartError::ProductNotFound(product_id));
        };

        if let Some(line) = self.items.iter_mut().find(|line| line.product_id() == product_id) {
            let Some(total) = line.increase(quantity.unsigned_abs()) else {
                self.reporter.report(ShopEvent::QuantityOverflow { product_id });
                return Err(CartError::QuantityOverflow(product_id));
            };
            self.reporter.report(ShopEvent::ItemQuantityIncreased {
                product_id,
                quantity: total,
            });
            return Ok(());
        }

        let line = CartItem::new(product, quantity)?;
        let added = line.quantity();
        self.items.push(line);
        self.reporter.report(ShopEvent::ItemAdded {
            product_id,
            quantity: added,
        });
        Ok(())
    }

    /// Drops the line for `product_id`.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<CartItem, CartError> {
        let Some(index) = self.items.iter().position(|line| line.product_id() == product_id) else {
            self.reporter.report(ShopEvent::ItemNotInCart { product_id });
            return Err(CartError::NotInCart(product_id));
        };
        let removed = self.items.remove(index);
        self.reporter.report(ShopEvent::ItemRemoved { product_id });
        Ok(removed)
    }

    /// A copy of the current lines. Changing the returned vector never touches the cart.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|line| line.product_id() == product_id)
            .map(CartItem::quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "clear called");
        self.items.clear();
        self.reporter.report(ShopEvent::CartCleared);
    }

    /// Renders the cart. An empty cart reports `CartEmpty` instead of `CartViewed`.
    pub fn view(&self) -> CartView {
        let view = CartView {
            lines: self.items.iter().map(CartLine::from).collect(),
            total: self.total_price(),
        };
        let event = if view.is_empty() {
            ShopEvent::CartEmpty
        } else {
            ShopEvent::CartViewed {
                lines: view.lines.len(),
                total: view.total,
            }
        };
        self.reporter.report(event);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::reporting::mock::RecordingReporter;
    use std::rc::Rc;

    fn setup() -> (ProductManager, Cart, Rc<RecordingReporter>) {
        let recorder = Rc::new(RecordingReporter::new());
        let catalog = ProductManager::with_reporter(recorder.clone());
        for (id, name, price) in [(1, "Laptop", 75000.0), (2, "Phone", 45000.0)] {
            catalog
                .add_product(Product::new(ProductId(id), name, price).unwrap())
                .unwrap();
        }
        let cart = Cart::new(&catalog);
        recorder.take();
        (catalog, cart, recorder)
    }

    #[test]
    fn test_non_positive_quantity_leaves_cart_unchanged() {
        let (_catalog, mut cart, recorder) = setup();
        cart.add_item(ProductId(1), 1).unwrap();

        for quantity in [0, -1, i32::MIN] {
            assert_eq!(
                cart.add_item(ProductId(1), quantity),
                Err(CartError::InvalidQuantity(quantity))
            );
        }

        assert_eq!(cart.quantity_of(ProductId(1)), Some(1));
        assert_eq!(cart.len(), 1);
        assert_eq!(recorder.rejections().len(), 3);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let (_catalog, mut cart, recorder) = setup();

        assert_eq!(
            cart.add_item(ProductId(4), 1),
            Err(CartError::ProductNotFound(ProductId(4)))
        );
        assert!(cart.is_empty());
        recorder.assert_emitted(&ShopEvent::ProductNotFound { product_id: ProductId(4) });
    }

    #[test]
    fn test_same_product_merges_into_one_line() {
        let (_catalog, mut cart, recorder) = setup();

        cart.add_item(ProductId(2), 3).unwrap();
        cart.add_item(ProductId(2), 4).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId(2)), Some(7));
        assert_eq!(
            recorder.last(),
            Some(ShopEvent::ItemQuantityIncreased {
                product_id: ProductId(2),
                quantity: 7
            })
        );
    }

    #[test]
    fn test_overflow_keeps_existing_quantity() {
        let (_catalog, mut cart, _recorder) = setup();
        cart.add_item(ProductId(1), i32::MAX).unwrap();
        cart.add_item(ProductId(1), i32::MAX).unwrap();
        cart.add_item(ProductId(1), 1).unwrap();
        let full = cart.quantity_of(ProductId(1)).unwrap();
        assert_eq!(full, u32::MAX);

        assert_eq!(
            cart.add_item(ProductId(1), 1),
            Err(CartError::QuantityOverflow(ProductId(1)))
        );
        assert_eq!(cart.quantity_of(ProductId(1)), Some(full));
    }

    #[test]
    fn test_catalog_changes_are_seen() {
        let (catalog, mut cart, _recorder) = setup();

        catalog.remove_product(ProductId(1));
        assert_eq!(
            cart.add_item(ProductId(1), 1),
            Err(CartError::ProductNotFound(ProductId(1)))
        );

        catalog
            .add_product(Product::new(ProductId(3), "Headphones", 5000.0).unwrap())
            .unwrap();
        assert!(cart.add_item(ProductId(3), 1).is_ok());
    }

    #[test]
    fn test_remove_item() {
        let (_catalog, mut cart, recorder) = setup();
        cart.add_item(ProductId(1), 1).unwrap();
        cart.add_item(ProductId(2), 1).unwrap();

        let removed = cart.remove_item(ProductId(1)).unwrap();
        assert_eq!(removed.product_id(), ProductId(1));
        assert_eq!(cart.len(), 1);

        assert_eq!(
            cart.remove_item(ProductId(1)),
            Err(CartError::NotInCart(ProductId(1)))
        );
        recorder.assert_emitted(&ShopEvent::ItemNotInCart { product_id: ProductId(1) });
    }

    #[test]
    fn test_items_is_a_defensive_copy() {
        let (_catalog, mut cart, _recorder) = setup();
        cart.add_item(ProductId(1), 1).unwrap();

        let mut copy = cart.items();
        copy.clear();

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let (_catalog, mut cart, recorder) = setup();
        cart.add_item(ProductId(1), 2).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(recorder.last(), Some(ShopEvent::CartCleared));
    }

    #[test]
    fn test_view_reports_empty_distinctly() {
        let (_catalog, mut cart, recorder) = setup();

        let empty = cart.view();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "Cart is empty\n");
        assert_eq!(recorder.last(), Some(ShopEvent::CartEmpty));

        cart.add_item(ProductId(1), 1).unwrap();
        cart.add_item(ProductId(2), 2).unwrap();
        let view = cart.view();

        assert_eq!(view.lines[1].subtotal, 90000.0);
        assert_eq!(view.total, 165000.0);
        assert_eq!(
            view.to_string(),
            "Laptop x1 @ 75000.00 = 75000.00\nPhone x2 @ 45000.00 = 90000.00\nTotal: 165000.00\n"
        );
        assert_eq!(
            recorder.last(),
            Some(ShopEvent::CartViewed {
                lines: 2,
                total: 165000.0
            })
        );
    }
}
