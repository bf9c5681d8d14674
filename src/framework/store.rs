//! # Generic Resource Store
//!
//! This module defines `ResourceStore`, the component that owns a collection of entities and
//! applies the CRUD operations every manager in this crate needs. It is the synchronous
//! counterpart of a resource server: one owner, sequential access, no locks.

use crate::framework::entity::Entity;
use crate::framework::error::FrameworkError;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Insertion-ordered collection of entities keyed by `T::Id`.
///
/// # Implementation Details
///
/// The store keeps a `HashMap` (`store`) for lookups, a `Vec` of ids (`order`) so listings come
/// back in insertion order, and a `u32` counter (`next_id`) for sequential id generation.
///
/// ## Operations
///
/// * **Create**:
///     1. Takes the next id from the `next_id` counter (incrementing it).
///     2. Hands the id to a builder closure to instantiate the entity.
///     3. Inserts it like **Insert** does.
///
/// * **Insert**:
///     1. Rejects the entity if its id is already present.
///     2. Calls the `on_insert` hook.
///     3. Stores the entity and records its position.
///
/// * **Get**: returns a reference to the entity if found, or `None`.
///
/// * **Update**:
///     1. Looks up the entity (mutable access).
///     2. Calls the `on_update` hook; the entity modifies its own state there.
///     3. Returns the updated entity.
///
/// * **Remove**: drops the entity from both the map and the ordering.
///
/// The counter never goes backwards, so ids handed out by **Create** stay unique even after
/// removals.
#[derive(Debug)]
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Short type name used as the `entity_type` field in logs
    /// (e.g. "Order" instead of "shop_recipe::model::order::Order").
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Allocates the next sequential id and builds an entity with it.
    ///
    /// The id is consumed even when the builder or the insert hook fails.
    pub fn create<F>(&mut self, build: F) -> Result<T::Id, FrameworkError<T::Error>>
    where
        F: FnOnce(T::Id) -> Result<T, T::Error>,
    {
        let entity_type = Self::entity_type();
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        match build(id) {
            Ok(item) => self.insert(item),
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::EntityError(e))
            }
        }
    }

    /// Inserts an entity under its own id. Existing entries are never overwritten.
    pub fn insert(&mut self, item: T) -> Result<T::Id, FrameworkError<T::Error>> {
        let entity_type = Self::entity_type();
        let id = item.id();
        debug!(entity_type, ?item, "Insert");

        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Insert rejected, id already present");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        if let Err(e) = item.on_insert() {
            warn!(entity_type, %id, error = %e, "on_insert failed");
            return Err(FrameworkError::EntityError(e));
        }

        self.store.insert(id, item);
        self.order.push(id);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.store.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    /// Applies an update through the entity's `on_update` hook.
    ///
    /// A failing hook must leave the entity untouched; the store does not roll back.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<&T, FrameworkError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");

        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Update failed, not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        match item.on_update(update) {
            Ok(()) => {
                info!(entity_type, %id, "Updated");
                Ok(&*item)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "on_update failed");
                Err(FrameworkError::EntityError(e))
            }
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let entity_type = Self::entity_type();
        let removed = self.store.remove(id);
        if removed.is_some() {
            self.order.retain(|existing| existing != id);
            info!(entity_type, %id, size = self.store.len(), "Deleted");
        } else {
            debug!(entity_type, %id, "Delete skipped, not found");
        }
        removed
    }

    /// Iterates entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct NoteId(u32);

    impl From<u32> for NoteId {
        fn from(id: u32) -> Self {
            Self(id)
        }
    }

    impl std::fmt::Display for NoteId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "note_{}", self.0)
        }
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum NoteError {
        #[error("Note text must not be empty")]
        Empty,
        #[error("Note is locked")]
        Locked,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        text: String,
        locked: bool,
    }

    impl Entity for Note {
        type Id = NoteId;
        type Update = String;
        type Error = NoteError;

        fn id(&self) -> NoteId {
            self.id
        }

        fn on_insert(&self) -> Result<(), NoteError> {
            if self.text.is_empty() {
                return Err(NoteError::Empty);
            }
            Ok(())
        }

        fn on_update(&mut self, text: String) -> Result<(), NoteError> {
            if self.locked {
                return Err(NoteError::Locked);
            }
            self.text = text;
            Ok(())
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id: NoteId(id),
            text: text.to_string(),
            locked: false,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = ResourceStore::<Note>::new();

        let first = store.create(|id| Ok(note(id.0, "a"))).unwrap();
        let second = store.create(|id| Ok(note(id.0, "b"))).unwrap();

        assert_eq!(first, NoteId(1));
        assert_eq!(second, NoteId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut store = ResourceStore::<Note>::new();
        let first = store.create(|id| Ok(note(id.0, "a"))).unwrap();
        store.remove(&first);

        let next = store.create(|id| Ok(note(id.0, "b"))).unwrap();
        assert_eq!(next, NoteId(2));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = ResourceStore::<Note>::new();
        store.insert(note(7, "original")).unwrap();

        let result = store.insert(note(7, "replacement"));

        assert_eq!(result, Err(FrameworkError::AlreadyExists("note_7".to_string())));
        assert_eq!(store.get(&NoteId(7)).unwrap().text, "original");
    }

    #[test]
    fn test_insert_hook_failure_leaves_store_empty() {
        let mut store = ResourceStore::<Note>::new();

        let result = store.insert(note(1, ""));

        assert_eq!(result, Err(FrameworkError::EntityError(NoteError::Empty)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_runs_hook() {
        let mut store = ResourceStore::<Note>::new();
        store.insert(note(1, "draft")).unwrap();
        let mut locked = note(2, "final");
        locked.locked = true;
        store.insert(locked).unwrap();

        let updated = store.update(&NoteId(1), "edited".to_string()).unwrap();
        assert_eq!(updated.text, "edited");

        let refused = store.update(&NoteId(2), "edited".to_string());
        assert_eq!(refused, Err(FrameworkError::EntityError(NoteError::Locked)));
        assert_eq!(store.get(&NoteId(2)).unwrap().text, "final");

        let missing = store.update(&NoteId(9), "edited".to_string());
        assert_eq!(missing, Err(FrameworkError::NotFound("note_9".to_string())));
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut store = ResourceStore::<Note>::new();
        store.insert(note(3, "c")).unwrap();
        store.insert(note(1, "a")).unwrap();
        store.insert(note(2, "b")).unwrap();
        store.remove(&NoteId(1));

        let texts: Vec<_> = store.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b"]);
    }
}
