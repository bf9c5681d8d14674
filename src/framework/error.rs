//! # Framework Errors
//!
//! Common error type returned by [`ResourceStore`](super::ResourceStore). Each manager maps
//! it into its own domain error enum, so callers only ever match on `ProductError`,
//! `CartError` or `OrderError`.

/// Errors that can occur within the store itself.
///
/// `E` is the entity's own error type, surfaced when a hook refuses an operation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError<E: std::error::Error + 'static> {
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(#[source] E),
}
