//! # Reporting
//!
//! The managers never print. Every outcome, success or soft rejection, is handed to a
//! [`Reporter`] as a [`ShopEvent`]. The default [`TracingReporter`] turns events into
//! structured `tracing` records; tests swap in a [`RecordingReporter`](mock::RecordingReporter)
//! and assert on the events themselves.
//!
//! ```rust
//! use shop_recipe::model::{Product, ProductId};
//! use shop_recipe::product_manager::ProductManager;
//! use shop_recipe::reporting::{mock::RecordingReporter, ShopEvent};
//! use std::rc::Rc;
//!
//! let recorder = Rc::new(RecordingReporter::new());
//! let catalog = ProductManager::with_reporter(recorder.clone());
//!
//! catalog.add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap()).unwrap();
//! recorder.assert_emitted(&ShopEvent::ProductAdded {
//!     product_id: ProductId(1),
//!     name: "Laptop".to_string(),
//! });
//! ```

pub mod events;
pub mod mock;

pub use events::*;

use std::rc::Rc;
use tracing::{info, warn};

/// Sink for operation outcomes.
pub trait Reporter {
    fn report(&self, event: ShopEvent);
}

/// Shared handle to a reporter. One reporter usually serves a whole
/// [`ShopSystem`](crate::lifecycle::ShopSystem).
pub type SharedReporter = Rc<dyn Reporter>;

/// Default reporter: soft rejections at `WARN`, everything else at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: ShopEvent) {
        let kind = event.kind();
        if event.is_rejection() {
            warn!(kind, "{event}");
        } else {
            info!(kind, "{event}");
        }
    }
}

pub(crate) fn default_reporter() -> SharedReporter {
    Rc::new(TracingReporter)
}
