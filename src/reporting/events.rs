//! The vocabulary of outcomes the managers announce.

use crate::model::{OrderId, OrderStatus, ProductId};
use serde::Serialize;
use std::fmt::Display;

/// One reportable outcome of a catalog, cart or order operation.
///
/// Successful state changes and soft rejections share this enum; [`ShopEvent::is_rejection`]
/// tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShopEvent {
    // --- Catalog ---
    ProductAdded { product_id: ProductId, name: String },
    DuplicateProduct { product_id: ProductId },
    ProductRemoved { product_id: ProductId },
    CatalogListed { count: usize },
    CatalogEmpty,

    // --- Cart ---
    /// `quantity` is the line's quantity after the change.
    ItemAdded { product_id: ProductId, quantity: u32 },
    ItemQuantityIncreased { product_id: ProductId, quantity: u32 },
    InvalidQuantity { product_id: ProductId, quantity: i32 },
    ProductNotFound { product_id: ProductId },
    QuantityOverflow { product_id: ProductId },
    ItemRemoved { product_id: ProductId },
    ItemNotInCart { product_id: ProductId },
    CartCleared,
    CartViewed { lines: usize, total: f64 },
    CartEmpty,

    // --- Orders ---
    OrderPlaced { order_id: OrderId, total: f64 },
    EmptyCartRejected,
    OrdersListed { count: usize },
    NoOrders,
    OrderStatusUpdated { order_id: OrderId, from: OrderStatus, to: OrderStatus },
    OrderNotFound { order_id: OrderId },
    IllegalTransition { order_id: OrderId, from: OrderStatus, to: OrderStatus },
}

impl ShopEvent {
    /// True for soft conditions: the operation was refused and nothing changed.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ShopEvent::DuplicateProduct { .. }
                | ShopEvent::InvalidQuantity { .. }
                | ShopEvent::ProductNotFound { .. }
                | ShopEvent::QuantityOverflow { .. }
                | ShopEvent::ItemNotInCart { .. }
                | ShopEvent::EmptyCartRejected
                | ShopEvent::OrderNotFound { .. }
                | ShopEvent::IllegalTransition { .. }
        )
    }

    /// Stable snake_case name, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ShopEvent::ProductAdded { .. } => "product_added",
            ShopEvent::DuplicateProduct { .. } => "duplicate_product",
            ShopEvent::ProductRemoved { .. } => "product_removed",
            ShopEvent::CatalogListed { .. } => "catalog_listed",
            ShopEvent::CatalogEmpty => "catalog_empty",
            ShopEvent::ItemAdded { .. } => "item_added",
            ShopEvent::ItemQuantityIncreased { .. } => "item_quantity_increased",
            ShopEvent::InvalidQuantity { .. } => "invalid_quantity",
            ShopEvent::ProductNotFound { .. } => "product_not_found",
            ShopEvent::QuantityOverflow { .. } => "quantity_overflow",
            ShopEvent::ItemRemoved { .. } => "item_removed",
            ShopEvent::ItemNotInCart { .. } => "item_not_in_cart",
            ShopEvent::CartCleared => "cart_cleared",
            ShopEvent::CartViewed { .. } => "cart_viewed",
            ShopEvent::CartEmpty => "cart_empty",
            ShopEvent::OrderPlaced { .. } => "order_placed",
            ShopEvent::EmptyCartRejected => "empty_cart_rejected",
            ShopEvent::OrdersListed { .. } => "orders_listed",
            ShopEvent::NoOrders => "no_orders",
            ShopEvent::OrderStatusUpdated { .. } => "order_status_updated",
            ShopEvent::OrderNotFound { .. } => "order_not_found",
            ShopEvent::IllegalTransition { .. } => "illegal_transition",
        }
    }
}

impl Display for ShopEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopEvent::ProductAdded { product_id, name } => {
                write!(f, "Product added: {name} ({product_id})")
            }
            ShopEvent::DuplicateProduct { product_id } => {
                write!(f, "Product {product_id} already exists")
            }
            ShopEvent::ProductRemoved { product_id } => write!(f, "Product {product_id} removed"),
            ShopEvent::CatalogListed { count } => write!(f, "Catalog has {count} product(s)"),
            ShopEvent::CatalogEmpty => f.write_str("No products available"),
            ShopEvent::ItemAdded { product_id, quantity } => {
                write!(f, "Added {product_id} to cart, quantity {quantity}")
            }
            ShopEvent::ItemQuantityIncreased { product_id, quantity } => {
                write!(f, "Increased {product_id} in cart to quantity {quantity}")
            }
            ShopEvent::InvalidQuantity { product_id, quantity } => {
                write!(f, "Quantity must be positive (got {quantity} for {product_id})")
            }
            ShopEvent::ProductNotFound { product_id } => write!(f, "Product {product_id} not found"),
            ShopEvent::QuantityOverflow { product_id } => {
                write!(f, "Quantity for {product_id} is too large")
            }
            ShopEvent::ItemRemoved { product_id } => write!(f, "Removed {product_id} from cart"),
            ShopEvent::ItemNotInCart { product_id } => write!(f, "Product {product_id} not in cart"),
            ShopEvent::CartCleared => f.write_str("Cart cleared"),
            ShopEvent::CartViewed { lines, total } => {
                write!(f, "Cart has {lines} line(s), total {total:.2}")
            }
            ShopEvent::CartEmpty => f.write_str("Cart is empty"),
            ShopEvent::OrderPlaced { order_id, total } => {
                write!(f, "Order {order_id} created, total {total:.2}")
            }
            ShopEvent::EmptyCartRejected => f.write_str("Cannot create order: cart is empty"),
            ShopEvent::OrdersListed { count } => write!(f, "{count} order(s) on record"),
            ShopEvent::NoOrders => f.write_str("No orders"),
            ShopEvent::OrderStatusUpdated { order_id, from, to } => {
                write!(f, "Order {order_id} status changed from {from} to {to}")
            }
            ShopEvent::OrderNotFound { order_id } => write!(f, "Order {order_id} not found"),
            ShopEvent::IllegalTransition { order_id, from, to } => {
                write!(f, "Order {order_id} cannot move from {from} to {to}")
            }
        }
    }
}
