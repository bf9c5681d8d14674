use crate::cart::Cart;
use crate::lifecycle::ShopConfig;
use crate::model::OrderId;
use crate::order_manager::{OrderError, OrderManager};
use crate::product_manager::ProductManager;
use crate::reporting::{default_reporter, SharedReporter};
use tracing::info;

/// Wires one catalog, one shopping session and one order book around a single reporter.
///
/// `ShopSystem` is responsible for:
/// - **Dependency Wiring**: the cart gets a handle to the catalog, not a global
/// - **Shared Reporting**: every component announces through the same reporter
/// - **Configuration**: the order manager's transition policy comes from [`ShopConfig`]
///
/// # Example
///
/// ```rust
/// use shop_recipe::lifecycle::ShopSystem;
/// use shop_recipe::model::{OrderStatus, Product, ProductId};
///
/// let mut system = ShopSystem::new();
/// system.catalog.add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap()).unwrap();
/// system.cart.add_item(ProductId(1), 1).unwrap();
///
/// let id = system.checkout().unwrap();
/// system.orders.update_order_status(id, OrderStatus::Shipped).unwrap();
/// ```
pub struct ShopSystem {
    /// The shared catalog.
    pub catalog: ProductManager,

    /// The current shopping session.
    pub cart: Cart,

    /// Every order placed so far.
    pub orders: OrderManager,

    reporter: SharedReporter,
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopSystem {
    /// Default configuration, reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_config(ShopConfig::default())
    }

    pub fn with_config(config: ShopConfig) -> Self {
        Self::with_reporter(config, default_reporter())
    }

    pub fn with_reporter(config: ShopConfig, reporter: SharedReporter) -> Self {
        info!(policy = ?config.transition_policy, "Starting shop");

        let catalog = ProductManager::with_reporter(reporter.clone());
        let cart = Cart::new(&catalog);
        let orders =
            OrderManager::with_reporter(reporter.clone()).with_policy(config.transition_policy);

        Self {
            catalog,
            cart,
            orders,
            reporter,
        }
    }

    /// Opens another cart on the same catalog, e.g. for a second shopper.
    pub fn new_cart(&self) -> Cart {
        Cart::with_reporter(&self.catalog, self.reporter.clone())
    }

    /// Submits the system's own cart.
    pub fn checkout(&mut self) -> Result<OrderId, OrderError> {
        self.orders.add_order(&mut self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, Product, ProductId};
    use crate::order_manager::TransitionPolicy;
    use crate::reporting::mock::RecordingReporter;
    use crate::reporting::ShopEvent;
    use std::rc::Rc;

    #[test]
    fn test_config_reaches_order_manager() {
        let config = ShopConfig {
            transition_policy: TransitionPolicy::Lifecycle,
        };
        let system = ShopSystem::with_config(config);
        assert_eq!(system.orders.policy(), TransitionPolicy::Lifecycle);
    }

    #[test]
    fn test_extra_carts_share_catalog_and_orders() {
        let recorder = Rc::new(RecordingReporter::new());
        let mut system = ShopSystem::with_reporter(ShopConfig::default(), recorder.clone());
        system
            .catalog
            .add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap())
            .unwrap();

        let mut second = system.new_cart();
        second.add_item(ProductId(1), 2).unwrap();
        system.cart.add_item(ProductId(1), 1).unwrap();

        let first_id = system.checkout().unwrap();
        let second_id = system.orders.add_order(&mut second).unwrap();

        assert_eq!(first_id.0 + 1, second_id.0);
        assert!(second.is_empty());
        assert_eq!(
            system.orders.find_order(second_id).unwrap().status(),
            OrderStatus::Preparing
        );
        recorder.assert_emitted(&ShopEvent::OrderPlaced {
            order_id: second_id,
            total: 150000.0,
        });
    }
}
