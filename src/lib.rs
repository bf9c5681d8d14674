#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Shop Recipe
//!
//! > **A Recipe for an in-memory storefront in Rust.**
//!
//! This crate models a small shop: a product catalog, a shopping cart and an order book
//! with a four-state order lifecycle. Everything lives in memory and runs on one thread.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Resources over ad-hoc maps
//!
//! Products and orders are both *resources*: keyed, created, looked up, updated and removed.
//! Instead of writing that bookkeeping twice, both sit in a generic
//! [`ResourceStore<T>`](framework::ResourceStore) and only describe what is special about them
//! through the [`Entity`](framework::Entity) trait.
//!
//! ### Outcomes are values
//!
//! Every operation returns a `Result`. Rejected input (a negative quantity, an unknown product,
//! an empty cart at checkout) comes back as a typed error *and* is announced to a
//! [`Reporter`](reporting::Reporter). Nothing in the managers prints.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `T`
//! `ResourceStore<T: Entity>` holds the id counter, insertion order and hook calls for any entity.
//! -   **Benefit**: the catalog and the order book share one tested implementation.
//! -   **Trade-off**: entity-specific checks move into `on_insert` / `on_update` hooks.
//!
//! ### Mocking: Testing without Pain
//! Asserting on log lines is brittle. [`RecordingReporter`](reporting::mock::RecordingReporter)
//! captures every [`ShopEvent`](reporting::ShopEvent) so tests can assert on them directly.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each manager defines its own error type ([`ProductError`](product_manager::ProductError),
//! [`CartError`](cart::CartError), [`OrderError`](order_manager::OrderError)) built with `thiserror`.
//!
//! ### 2. Explicit Dependencies
//! A [`Cart`](cart::Cart) is handed the [`ProductManager`](product_manager::ProductManager) it
//! resolves ids against. There is no global catalog.
//!
//! ### 3. Snapshots
//! Placing an order copies name, price and quantity out of the cart. Later catalog changes do
//! not reach existing orders.
//!
//! ### 4. Observability
//! We use `tracing` with structured fields (`entity_type`, `kind`).
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic entity storage shared by catalog and order book.
//! - **Key items**: [`Entity`](framework::Entity), [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Data ([`model`])
//! - **Role**: [`Product`](model::Product), [`CartItem`](model::CartItem),
//!   [`Order`](model::Order) and [`OrderStatus`](model::OrderStatus).
//!
//! ### 3. The Managers ([`product_manager`], [`cart`], [`order_manager`])
//! - **Role**: The operations a shopper and a clerk perform.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Wires the managers around one reporter and one configuration.
//! - **Key items**: [`ShopSystem`](lifecycle::ShopSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Voice ([`reporting`])
//! - **Role**: Turns outcomes into log records, or into a list in tests.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use shop_recipe::lifecycle::ShopSystem;
//! use shop_recipe::model::{OrderStatus, Product, ProductId};
//!
//! let mut shop = ShopSystem::new();
//! shop.catalog.add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap()).unwrap();
//! shop.catalog.add_product(Product::new(ProductId(2), "Phone", 45000.0).unwrap()).unwrap();
//!
//! shop.cart.add_item(ProductId(1), 1).unwrap();
//! shop.cart.add_item(ProductId(2), 2).unwrap();
//! assert!(shop.cart.add_item(ProductId(4), 1).is_err());
//!
//! let order_id = shop.checkout().unwrap();
//! assert!(shop.cart.is_empty());
//!
//! let order = shop.orders.find_order(order_id).unwrap();
//! assert_eq!(order.status(), OrderStatus::Preparing);
//! assert_eq!(order.total_price(), 165000.0);
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test -- --nocapture
//! ```

pub mod cart;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_manager;
pub mod product_manager;
pub mod reporting;
