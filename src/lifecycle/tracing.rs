//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole shop.
//!
//! ## Overview
//!
//! Managers never print. State changes and soft rejections flow through the
//! [`Reporter`](crate::reporting::Reporter); the default
//! [`TracingReporter`](crate::reporting::TracingReporter) turns them into `tracing` events,
//! and the generic store adds its own `debug!` records with an `entity_type` field.
//! [`setup_tracing`] installs the subscriber that prints all of it.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only (product added, order placed, rejections)
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Store lookups and full payloads
//! RUST_LOG=debug cargo test -- --nocapture
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO kind="product_added" Product added: Laptop (product_1)
//! INFO add_item: kind="item_added" Added product_1 to cart, quantity 1
//! WARN add_item: kind="invalid_quantity" Quantity must be positive (got -1 for product_3)
//! INFO add_order: Created entity_type="Order" id=order_1 size=1
//! INFO add_order: kind="order_placed" Order order_1 created, total 165000.00
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once: later calls return the "already set" error and leave the
/// first subscriber in place.
pub fn setup_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and kind fields identify the source
        .compact()
        .try_init()
}
