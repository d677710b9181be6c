//! Normalized entity storage and its read-only selectors.
//!
//! DESIGN
//! ======
//! Entities live in a map keyed by id; a separate id list holds the display
//! order (most recently updated first). The list is never patched in place.
//! Every mutation in `adapter.rs` ends with a full `sort_ids`, so the list is
//! always exactly the map's key set in order.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::entity::Entity;

/// Id-keyed entity map plus its derived ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityTable<E> {
    pub(crate) ids: Vec<String>,
    pub(crate) entities: HashMap<String, E>,
}

impl<E> Default for EntityTable<E> {
    fn default() -> Self {
        Self { ids: Vec::new(), entities: HashMap::new() }
    }
}

impl<E: Entity> EntityTable<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entities in display order.
    pub fn select_all(&self) -> Vec<&E> {
        self.ids.iter().filter_map(|id| self.entities.get(id)).collect()
    }

    pub fn select_by_id(&self, id: &str) -> Option<&E> {
        self.entities.get(id)
    }

    pub fn select_entities(&self) -> &HashMap<String, E> {
        &self.entities
    }

    pub fn select_ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of cached entities. Not the server-side total.
    pub fn select_total(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Rebuild `ids` from the map: newest `updated_at` first, unparseable
    /// timestamps last, equal instants by ascending id.
    pub(crate) fn sort_ids(&mut self) {
        let mut ids: Vec<String> = self.entities.keys().cloned().collect();
        ids.sort_by_cached_key(|id| {
            let instant = self.entities.get(id).and_then(|e| e.updated_at().instant());
            (Reverse(instant), id.clone())
        });
        self.ids = ids;
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
