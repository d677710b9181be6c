//! Merge operations on an [`EntityTable`].
//!
//! Every operation is total: a missing id is a no-op, never an error. Each
//! call re-derives the id order once before returning, batches included.

use crate::entity::Entity;
use crate::table::EntityTable;

impl<E: Entity> EntityTable<E> {
    /// Insert `entity`, or fully replace the record stored under its id.
    pub fn upsert_one(&mut self, entity: E) {
        self.put(entity);
        self.sort_ids();
    }

    /// Upsert each entity in sequence. Later duplicates win.
    pub fn upsert_many<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>,
    {
        for entity in entities {
            self.put(entity);
        }
        self.sort_ids();
    }

    /// Shallow-merge `changes` into the entity stored under `id`.
    ///
    /// If the merge changes the entity's id, it is re-keyed and replaces
    /// whatever was stored under the new id. Returns `false` when `id` is
    /// not cached.
    pub fn update_one(&mut self, id: &str, changes: &E::Changes) -> bool {
        let Some(mut entity) = self.entities.remove(id) else {
            return false;
        };
        entity.apply_changes(changes);
        self.put(entity);
        self.sort_ids();
        true
    }

    /// Remove the entity stored under `id`, returning it if present.
    pub fn remove_one(&mut self, id: &str) -> Option<E> {
        let removed = self.entities.remove(id);
        self.sort_ids();
        removed
    }

    /// Remove every listed id. Returns how many were actually cached.
    pub fn remove_many<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed = ids
            .into_iter()
            .filter(|id| self.entities.remove(*id).is_some())
            .count();
        self.sort_ids();
        removed
    }

    pub fn remove_all(&mut self) {
        self.entities.clear();
        self.ids.clear();
    }

    fn put(&mut self, entity: E) {
        self.entities.insert(entity.id().to_owned(), entity);
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;
