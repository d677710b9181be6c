//! Board-list state: the cached boards, their pagination window, and view flags.
//!
//! DESIGN
//! ======
//! One `BoardsState` exists per session and has a single owner (the
//! [`BoardStore`](crate::store::BoardStore) in practice). Every change goes
//! through [`BoardsState::apply`], one action at a time, so the table's
//! uniqueness and ordering hold after every step. Readers get shared
//! references only.

use std::collections::HashMap;

use crate::config::BoardsConfig;
use crate::entity::{Board, BoardChanges};
use crate::lifecycle::{self, BoardEvent, Pagination};
use crate::table::EntityTable;
use crate::view::ViewState;

/// Everything a reducer step can do to [`BoardsState`].
#[derive(Clone, Debug, PartialEq)]
pub enum BoardsAction {
    /// Insert or fully replace a board.
    Upserted(Board),
    /// Shallow-merge fields into a cached board; unknown ids are ignored.
    UpdatedOne { board_id: String, changes: BoardChanges },
    /// Drop a board from the cache; unknown ids are ignored.
    Removed(String),
    IdSelected(Option<String>),
    SearchTextSet(String),
    UpdateModalOpenSet(bool),
    /// A remote operation moved through its lifecycle.
    Lifecycle(BoardEvent),
}

impl From<BoardEvent> for BoardsAction {
    fn from(event: BoardEvent) -> Self {
        Self::Lifecycle(event)
    }
}

/// Cached boards plus list and view metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardsState {
    table: EntityTable<Board>,
    pagination: Pagination,
    view: ViewState,
}

impl BoardsState {
    /// Initial state: empty cache, offset 0, configured page size, nothing selected.
    #[must_use]
    pub fn new(config: &BoardsConfig) -> Self {
        Self { table: EntityTable::new(), pagination: Pagination::new(config.page_limit), view: ViewState::default() }
    }

    /// Apply one action in place.
    pub fn apply(&mut self, action: BoardsAction) {
        match action {
            BoardsAction::Upserted(board) => self.table.upsert_one(board),
            BoardsAction::UpdatedOne { board_id, changes } => {
                self.table.update_one(&board_id, &changes);
            }
            BoardsAction::Removed(board_id) => {
                self.table.remove_one(&board_id);
            }
            BoardsAction::IdSelected(board_id) => self.view.select_board(board_id),
            BoardsAction::SearchTextSet(text) => self.view.set_search_text(text),
            BoardsAction::UpdateModalOpenSet(open) => self.view.set_update_modal_open(open),
            BoardsAction::Lifecycle(event) => lifecycle::apply_event(&mut self.table, &mut self.pagination, event),
        }
    }

    // -------------------------------------------------------------------------
    // selectors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn table(&self) -> &EntityTable<Board> {
        &self.table
    }

    #[must_use]
    pub fn select_all(&self) -> Vec<&Board> {
        self.table.select_all()
    }

    #[must_use]
    pub fn select_by_id(&self, board_id: &str) -> Option<&Board> {
        self.table.select_by_id(board_id)
    }

    #[must_use]
    pub fn select_entities(&self) -> &HashMap<String, Board> {
        self.table.select_entities()
    }

    #[must_use]
    pub fn select_ids(&self) -> &[String] {
        self.table.select_ids()
    }

    /// Number of cached boards. See [`BoardsState::total`] for the server count.
    #[must_use]
    pub fn select_total(&self) -> usize {
        self.table.select_total()
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.pagination.offset
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.pagination.limit
    }

    /// Server-reported board count across all pages.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pagination.total
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn selected_board_id(&self) -> Option<&str> {
        self.view.selected_board_id.as_deref()
    }

    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.view.search_text.as_deref()
    }

    #[must_use]
    pub fn update_board_modal_open(&self) -> bool {
        self.view.update_board_modal_open
    }
}

/// Pure reducer form of [`BoardsState::apply`].
#[must_use]
pub fn reduce(mut state: BoardsState, action: BoardsAction) -> BoardsState {
    state.apply(action);
    state
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
