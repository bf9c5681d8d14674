//! # System Lifecycle & Wiring
//!
//! Individual components are simple; wiring them is where the decisions live. This module
//! builds a complete shop and sets up observability.
//!
//! **Key Responsibilities:**
//! 1. **Component Creation** - catalog, cart and order manager
//! 2. **Dependency Injection** - the cart receives a catalog handle, everyone receives the reporter
//! 3. **Configuration** - [`ShopConfig`] selects the order transition policy
//! 4. **Observability Setup** - [`setup_tracing`] installs the log subscriber
//!
//! ## The ShopSystem Pattern
//!
//! ```rust,ignore
//! impl ShopSystem {
//!     pub fn with_reporter(config: ShopConfig, reporter: SharedReporter) -> Self {
//!         let catalog = ProductManager::with_reporter(reporter.clone());
//!         let cart = Cart::new(&catalog);
//!         let orders = OrderManager::with_reporter(reporter.clone())
//!             .with_policy(config.transition_policy);
//!         Self { catalog, cart, orders, reporter }
//!     }
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The catalog is not a singleton. [`ProductManager`](crate::product_manager::ProductManager)
//! is a handle over shared state, and each [`Cart`](crate::cart::Cart) is given one when it is
//! built. Tests build as many independent shops as they like.
//!
//! ## Observability & Tracing
//!
//! ```bash
//! RUST_LOG=info cargo test -- --nocapture     # outcomes
//! RUST_LOG=debug cargo test -- --nocapture    # store lookups and payloads
//! ```
//!
//! See the [`tracing`] module for a sample trace.

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::*;
