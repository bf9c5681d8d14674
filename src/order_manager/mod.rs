//! # Order Manager
//!
//! Turns carts into orders and tracks each order's status afterwards.
//!
//! ## Overview
//!
//! [`OrderManager::add_order`] copies a cart's lines into a new [`Order`] by value, assigns
//! the next id from the store's counter, and empties the cart. From then on the order's
//! lines and total never change; only its [`OrderStatus`] does, through
//! [`OrderManager::update_order_status`] and the manager's [`TransitionPolicy`].
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`policy`] - [`TransitionPolicy`] table of legal status changes
//! - [`view`] - [`OrderView`] rendering
//!
//! ## Usage
//!
//! ```rust
//! use shop_recipe::cart::Cart;
//! use shop_recipe::model::{OrderId, OrderStatus, Product, ProductId};
//! use shop_recipe::order_manager::{OrderError, OrderManager, TransitionPolicy};
//! use shop_recipe::product_manager::ProductManager;
//!
//! let catalog = ProductManager::new();
//! catalog.add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap()).unwrap();
//! let mut cart = Cart::new(&catalog);
//! cart.add_item(ProductId(1), 1).unwrap();
//!
//! let mut orders = OrderManager::new().with_policy(TransitionPolicy::Lifecycle);
//! let id = orders.add_order(&mut cart).unwrap();
//! assert!(cart.is_empty());
//!
//! orders.update_order_status(id, OrderStatus::Shipped).unwrap();
//! assert!(matches!(
//!     orders.update_order_status(id, OrderStatus::Preparing),
//!     Err(OrderError::IllegalTransition { .. })
//! ));
//! assert_eq!(orders.find_order(OrderId(1)).unwrap().status(), OrderStatus::Shipped);
//! ```

pub mod entity;
pub mod error;
pub mod policy;
pub mod view;

pub use error::*;
pub use policy::*;
pub use view::*;

use crate::cart::Cart;
use crate::framework::{FrameworkError, ResourceStore};
use crate::model::{Order, OrderId, OrderStatus, StatusChange};
use crate::reporting::{default_reporter, SharedReporter, ShopEvent};
use tracing::{debug, instrument};

/// Owns every submitted order.
pub struct OrderManager {
    orders: ResourceStore<Order>,
    policy: TransitionPolicy,
    reporter: SharedReporter,
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager")
            .field("orders", &self.orders.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl OrderManager {
    /// Creates an empty, permissive order manager that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_reporter(default_reporter())
    }

    pub fn with_reporter(reporter: SharedReporter) -> Self {
        Self {
            orders: ResourceStore::new(),
            policy: TransitionPolicy::default(),
            reporter,
        }
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Snapshots `cart` into a new order and clears the cart.
    ///
    /// An empty cart is a soft rejection: nothing is created and the id counter is not
    /// advanced, so ids stay equal to the number of orders placed so far.
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub fn add_order(&mut self, cart: &mut Cart) -> Result<OrderId, OrderError> {
        if cart.is_empty() {
            self.reporter.report(ShopEvent::EmptyCartRejected);
            return Err(OrderError::EmptyCart);
        }

        let items = cart.items();
        let order_id = self
            .orders
            .create(|id| Ok(Order::new(id, &items)))
            .map_err(|e| match e {
                FrameworkError::EntityError(e) => e,
                other => OrderError::StoreError(other.to_string()),
            })?;

        cart.clear();
        let total = self
            .orders
            .get(&order_id)
            .map(Order::total_price)
            .unwrap_or_default();
        self.reporter.report(ShopEvent::OrderPlaced { order_id, total });
        Ok(order_id)
    }

    /// Sets the status of `order_id`, returning the status it had before.
    ///
    /// A missing order or a change the policy forbids is reported and leaves every order
    /// untouched.
    #[instrument(skip(self))]
    pub fn update_order_status(
        &mut self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        let Some(from) = self.orders.get(&order_id).map(Order::status) else {
            self.reporter.report(ShopEvent::OrderNotFound { order_id });
            return Err(OrderError::NotFound(order_id));
        };

        let change = StatusChange {
            status,
            policy: self.policy,
        };
        match self.orders.update(&order_id, change) {
            Ok(_) => {
                self.reporter.report(ShopEvent::OrderStatusUpdated {
                    order_id,
                    from,
                    to: status,
                });
                Ok(from)
            }
            Err(FrameworkError::EntityError(e)) => {
                self.reporter.report(ShopEvent::IllegalTransition {
                    order_id,
                    from,
                    to: status,
                });
                Err(e)
            }
            Err(FrameworkError::NotFound(_) | FrameworkError::AlreadyExists(_)) => {
                self.reporter.report(ShopEvent::OrderNotFound { order_id });
                Err(OrderError::NotFound(order_id))
            }
        }
    }

    /// Renders every order in creation order. Reports `NoOrders` when there are none.
    pub fn view_orders(&self) -> Vec<OrderView> {
        let views: Vec<OrderView> = self.orders.iter().map(OrderView::from).collect();
        debug!(count = views.len(), "view_orders called");

        let event = if views.is_empty() {
            ShopEvent::NoOrders
        } else {
            ShopEvent::OrdersListed { count: views.len() }
        };
        self.reporter.report(event);
        views
    }

    pub fn find_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Orders in creation order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
