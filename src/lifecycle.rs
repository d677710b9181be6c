//! Three-phase lifecycle events for remote board operations.
//!
//! DESIGN
//! ======
//! Every remote operation reports `Requested`, then exactly one of
//! `Succeeded` or `Failed`. Events arrive in the order operations settled,
//! not the order they started, so each handler below must leave the table
//! valid on its own. A stale success is merged like any other
//! (last-applied wins).
//!
//! The loading flag tracks list fetches only. Two overlapping fetches share
//! it: the first one to settle clears it while the other is still running.
//!
//! A page reporting `limit: 0` keeps the previous page size, so the next-page
//! window never collapses onto the same offset.
//!
//! Deletes are applied when requested, not when confirmed. A failed delete
//! does not put the board back.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entity::Board;
use crate::error::BoardsError;
use crate::table::EntityTable;

/// Page size used before any configuration or fetch says otherwise.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

// =============================================================================
// TYPES
// =============================================================================

/// Remote operation an event or error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    ListBoards,
    CreateBoard,
    UpdateBoard,
    DeleteBoard,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListBoards => "board:list",
            Self::CreateBoard => "board:create",
            Self::UpdateBoard => "board:update",
            Self::DeleteBoard => "board:delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle position of one remote operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase<T> {
    Requested,
    Succeeded(T),
    Failed(BoardsError),
}

/// One page of boards as returned by a list fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardPage {
    pub items: Vec<Board>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

/// A lifecycle notification, tagged by operation.
///
/// `request_id` is shared by all phases of one operation.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    ListBoards { request_id: Uuid, phase: Phase<BoardPage> },
    CreateBoard { request_id: Uuid, phase: Phase<Board> },
    UpdateBoard { request_id: Uuid, board_id: String, phase: Phase<Board> },
    DeleteBoard { request_id: Uuid, board_id: String, phase: Phase<()> },
}

impl BoardEvent {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::ListBoards { .. } => Operation::ListBoards,
            Self::CreateBoard { .. } => Operation::CreateBoard,
            Self::UpdateBoard { .. } => Operation::UpdateBoard,
            Self::DeleteBoard { .. } => Operation::DeleteBoard,
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Uuid {
        match self {
            Self::ListBoards { request_id, .. }
            | Self::CreateBoard { request_id, .. }
            | Self::UpdateBoard { request_id, .. }
            | Self::DeleteBoard { request_id, .. } => *request_id,
        }
    }
}

/// Pagination window of the last successful list fetch, plus the loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Starting index of the last fetched page.
    pub offset: u64,
    /// Page size of the last fetch.
    pub limit: u64,
    /// Server-reported count across all pages.
    pub total: u64,
    /// True while a list fetch is outstanding.
    pub is_loading: bool,
}

impl Pagination {
    #[must_use]
    pub fn new(limit: u64) -> Self {
        Self { offset: 0, limit, total: 0, is_loading: false }
    }

    /// Offset of the page after the last one fetched.
    #[must_use]
    pub fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }

    /// Whether the server reported boards beyond the last fetched page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_offset() < self.total
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Fold one lifecycle event into the table and pagination state.
pub fn apply_event(table: &mut EntityTable<Board>, pagination: &mut Pagination, event: BoardEvent) {
    match event {
        BoardEvent::ListBoards { request_id, phase } => match phase {
            Phase::Requested => {
                pagination.is_loading = true;
                debug!(%request_id, offset = pagination.offset, "boards: list requested");
            }
            Phase::Succeeded(page) => {
                pagination.is_loading = false;
                pagination.offset = page.offset;
                if page.limit == 0 {
                    warn!(%request_id, kept = pagination.limit, "boards: page reported zero limit; keeping previous");
                } else {
                    pagination.limit = page.limit;
                }
                pagination.total = page.total;
                let count = page.items.len();
                table.upsert_many(page.items);
                debug!(%request_id, count, cached = table.select_total(), total = page.total, "boards: page merged");
            }
            Phase::Failed(err) => {
                pagination.is_loading = false;
                warn!(%request_id, error = %err, "boards: list failed");
            }
        },
        BoardEvent::CreateBoard { request_id, phase } | BoardEvent::UpdateBoard { request_id, phase, .. } => {
            match phase {
                Phase::Requested => {}
                Phase::Succeeded(board) => {
                    debug!(%request_id, board_id = %board.board_id, "boards: upserting confirmed board");
                    table.upsert_one(board);
                }
                Phase::Failed(err) => warn!(%request_id, error = %err, "boards: mutation failed"),
            }
        }
        BoardEvent::DeleteBoard { request_id, board_id, phase } => match phase {
            Phase::Requested => {
                let removed = table.remove_one(&board_id).is_some();
                debug!(%request_id, %board_id, removed, "boards: optimistic delete");
            }
            Phase::Succeeded(()) => debug!(%request_id, %board_id, "boards: delete confirmed"),
            Phase::Failed(err) => {
                warn!(%request_id, %board_id, error = %err, "boards: delete failed after optimistic removal; not restored");
            }
        },
    }
}

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;
