//! # Recording Reporter & Testing Guide
//!
//! `RecordingReporter` implements [`Reporter`] by keeping every event in memory. Hand it to
//! the managers under test instead of the tracing reporter and assert on what they announced.
//!
//! ## Testing Strategies
//!
//! | Pattern | Setup | Use Case |
//! |---------|-------|----------|
//! | **Single manager** | One `ProductManager` / `Cart` / `OrderManager` with a recorder | Soft conditions of one component |
//! | **Full system** | `ShopSystem::with_reporter` | End-to-end checkout flows |
//!
//! Failure paths are the main reason this exists: a soft rejection changes no state, so the
//! event stream is the only observable proof it happened.
//!
//! ```rust
//! use shop_recipe::lifecycle::{ShopConfig, ShopSystem};
//! use shop_recipe::order_manager::OrderError;
//! use shop_recipe::reporting::{mock::RecordingReporter, ShopEvent};
//! use std::rc::Rc;
//!
//! let recorder = Rc::new(RecordingReporter::new());
//! let mut system = ShopSystem::with_reporter(ShopConfig::default(), recorder.clone());
//!
//! assert_eq!(system.checkout(), Err(OrderError::EmptyCart));
//! recorder.assert_emitted(&ShopEvent::EmptyCartRejected);
//! assert_eq!(recorder.rejections().len(), 1);
//! ```

use super::{Reporter, ShopEvent};
use std::cell::RefCell;

/// Reporter that records events for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<ShopEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first.
    pub fn events(&self) -> Vec<ShopEvent> {
        self.events.borrow().clone()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<ShopEvent> {
        self.events.take()
    }

    pub fn last(&self) -> Option<ShopEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn rejections(&self) -> Vec<ShopEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.is_rejection())
            .cloned()
            .collect()
    }

    pub fn contains(&self, expected: &ShopEvent) -> bool {
        self.events.borrow().iter().any(|event| event == expected)
    }

    /// Panics with the recorded stream if `expected` was never reported.
    pub fn assert_emitted(&self, expected: &ShopEvent) {
        assert!(
            self.contains(expected),
            "expected event {expected:?} was not reported; got {:?}",
            self.events.borrow()
        );
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: ShopEvent) {
        self.events.borrow_mut().push(event);
    }
}
