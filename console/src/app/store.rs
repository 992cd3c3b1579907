//! # Entity Stores
//!
//! In-memory mirrors of one server-owned collection each. A store is only
//! written from the event handler, after the server has answered.
//!
//! - `load` replaces the whole collection (entries missing from the new
//!   response are dropped)
//! - `apply_create` appends the server's canonical entity
//! - `apply_update` replaces in place by id, and fails on an unknown id
//! - `apply_delete` removes by id
//!
//! Searching and view modes are projections and never touch the collection.

use shared::{Order, Product, User};
use thiserror::Error;

/// A server-owned record with a stable id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in logs and errors
    const KIND: &'static str;

    fn entity_id(&self) -> &str;
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for Order {
    const KIND: &'static str = "order";

    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// Case-insensitive substring search over the fields a list is filtered by.
pub trait Searchable {
    /// `needle` is already lower-cased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

impl Searchable for Product {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Reconciliation failure between a server answer and the local store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} '{id}' is not in the local store")]
    UnknownEntity { kind: &'static str, id: String },
}

/// How a collection is laid out by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// One collection plus its load status.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
    loaded: bool,
    loading: bool,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            loading: false,
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// True once any load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a load as in flight. Returns false if one already is.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// A load failed; the previous collection is kept.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Replace the whole collection.
    pub fn load(&mut self, items: Vec<T>) {
        tracing::debug!(kind = T::KIND, previous = self.items.len(), next = items.len(), "Store replaced");
        self.items = items;
        self.loaded = true;
        self.loading = false;
    }

    /// Append a newly created entity.
    pub fn apply_create(&mut self, entity: T) {
        tracing::debug!(kind = T::KIND, id = %entity.entity_id(), "Store append");
        self.items.push(entity);
    }

    /// Replace the entity with `id` in place.
    pub fn apply_update(&mut self, id: &str, patched: T) -> Result<(), StoreError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.entity_id() == id)
            .ok_or_else(|| StoreError::UnknownEntity {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        *slot = patched;
        Ok(())
    }

    /// Remove the entity with `id`. Returns whether anything was removed.
    pub fn apply_delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.entity_id() != id);
        before != self.items.len()
    }

    /// Drop everything, e.g. on logout.
    pub fn clear(&mut self) {
        self.items.clear();
        self.loaded = false;
        self.loading = false;
    }
}

impl<T: Entity + Searchable> EntityStore<T> {
    /// Entities matching `query`, in store order. A blank query matches all.
    pub fn filter(&self, query: &str) -> Vec<&T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }
}
