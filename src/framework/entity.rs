//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored resource (Product, Order) implements so it
//! can live in a generic [`ResourceStore`](super::ResourceStore). It fixes the identifier type,
//! the update payload and the error type, and provides the `on_update` hook the store calls
//! when a caller mutates an entity in place.
//!
//! # Provided Methods (Hooks)
//! - [`Entity::on_insert`]
//!
//! Defaults to `Ok(())`. Override it when an entity needs to validate itself on the way in.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceStore`.
///
/// Associated types keep every store strongly typed: an `Order` store only accepts
/// `StatusChange` updates, and the compiler refuses a `Product` payload.
pub trait Entity: Clone + Debug + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 so the store can hand out sequential ids.
    type Id: Eq + Hash + Clone + Copy + Display + Debug + From<u32>;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// The error type for this entity.
    type Error: std::error::Error + 'static;

    /// Returns the identifier this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Called right before the entity is inserted.
    fn on_insert(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
