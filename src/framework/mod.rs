//! Generic resource store for in-memory entity collections.
//!
//! This module provides the building blocks every manager in the crate sits on.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be kept in a store
//! - [`ResourceStore`] - Keyed collection with insertion order and counter-based ids
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`crate::reporting::mock`] for a reporter that records events instead of logging them.

pub mod entity;
pub mod error;
pub mod store;

// Re-export core types for convenience
pub use entity::Entity;
pub use error::FrameworkError;
pub use store::ResourceStore;
