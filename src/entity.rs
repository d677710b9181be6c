//! Cached entity shape and the `Board` record.
//!
//! DESIGN
//! ======
//! The cache only ever looks at two things on a record: its identifier and
//! its `updated_at`. Everything else a board carries (name, cover image,
//! counts) stays as an opaque JSON map flattened next to those two fields,
//! so new server fields pass through without touching this crate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::timestamp::Timestamp;

/// Partial field set for shallow-merge updates.
pub type BoardChanges = Map<String, Value>;

/// A record that can live in an [`EntityTable`](crate::table::EntityTable).
pub trait Entity: Clone {
    /// Partial update payload accepted by [`Entity::apply_changes`].
    type Changes;

    /// Stable identifier used as the table key.
    fn id(&self) -> &str;

    /// Sort key; tables order entities most recent first.
    fn updated_at(&self) -> &Timestamp;

    /// Shallow-merge `changes` onto this record. Fields not mentioned are kept.
    fn apply_changes(&mut self, changes: &Self::Changes);
}

/// A named grouping of images, as returned by the boards API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub board_id: String,
    pub updated_at: Timestamp,
    /// Every other field the server sent, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Board {
    #[must_use]
    pub fn new(board_id: impl Into<String>, updated_at: Timestamp) -> Self {
        Self { board_id: board_id.into(), updated_at, fields: Map::new() }
    }

    /// Builder-style setter. `board_id` and `updated_at` go to the typed
    /// fields under the same rules as [`Entity::apply_changes`]; any other
    /// key is stored as an opaque field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut change = BoardChanges::new();
        change.insert(key.into(), value.into());
        self.apply_changes(&change);
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Entity for Board {
    type Changes = BoardChanges;

    fn id(&self) -> &str {
        &self.board_id
    }

    fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    fn apply_changes(&mut self, changes: &BoardChanges) {
        for (key, value) in changes {
            match key.as_str() {
                "board_id" => match value.as_str() {
                    Some(id) => self.board_id = id.to_owned(),
                    None => warn!(board_id = %self.board_id, "boards: ignoring non-string board_id change"),
                },
                "updated_at" => match Timestamp::from_value(value) {
                    Some(ts) => self.updated_at = ts,
                    None => warn!(board_id = %self.board_id, "boards: ignoring unusable updated_at change"),
                },
                _ => {
                    self.fields.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;
