//! Store host: owns the board state and runs remote operations against it.
//!
//! DESIGN
//! ======
//! `BoardStore` is cheap to clone; all clones share one `BoardsState` behind
//! a `RwLock`. Each action is applied under the write lock and the lock is
//! never held across a collaborator call, so actions apply one at a time in
//! the order operations settle.
//!
//! Every remote operation follows the same shape: mint a request id,
//! dispatch `Requested`, await the collaborator, dispatch `Succeeded` or
//! `Failed`, then hand the result back to the caller.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::api::BoardsApi;
use crate::config::BoardsConfig;
use crate::entity::{Board, BoardChanges};
use crate::error::{ApiError, BoardsError, ErrorCode};
use crate::lifecycle::{BoardEvent, BoardPage, Operation, Phase};
use crate::state::{BoardsAction, BoardsState};

#[derive(Clone)]
pub struct BoardStore {
    state: Arc<RwLock<BoardsState>>,
    api: Arc<dyn BoardsApi>,
}

impl BoardStore {
    #[must_use]
    pub fn new(api: Arc<dyn BoardsApi>, config: &BoardsConfig) -> Self {
        Self { state: Arc::new(RwLock::new(BoardsState::new(config))), api }
    }

    /// Apply one action to the shared state.
    pub async fn dispatch(&self, action: impl Into<BoardsAction>) {
        let action = action.into();
        self.state.write().await.apply(action);
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> BoardsState {
        self.state.read().await.clone()
    }

    /// Run `f` against the current state under the read lock.
    pub async fn read<R>(&self, f: impl FnOnce(&BoardsState) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    // =========================================================================
    // REMOTE OPERATIONS
    // =========================================================================

    /// Fetch one page and merge it into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BoardsError::FetchFailed`] if the collaborator rejects the
    /// fetch; the cache is left as it was.
    pub async fn list_boards(&self, offset: u64, limit: u64) -> Result<BoardPage, BoardsError> {
        let request_id = Uuid::new_v4();
        self.run(
            Operation::ListBoards,
            |phase| BoardEvent::ListBoards { request_id, phase },
            self.api.list_boards(offset, limit),
        )
        .await
    }

    /// Fetch the page after the last one fetched, using the current page size.
    ///
    /// # Errors
    ///
    /// Same as [`BoardStore::list_boards`].
    pub async fn list_next_page(&self) -> Result<BoardPage, BoardsError> {
        let (offset, limit) = self.read(|s| (s.pagination().next_offset(), s.limit())).await;
        self.list_boards(offset, limit).await
    }

    /// Create a board and cache the server's record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardsError::FetchFailed`] if the collaborator rejects the create.
    pub async fn create_board(&self, fields: BoardChanges) -> Result<Board, BoardsError> {
        let request_id = Uuid::new_v4();
        self.run(
            Operation::CreateBoard,
            |phase| BoardEvent::CreateBoard { request_id, phase },
            self.api.create_board(&fields),
        )
        .await
    }

    /// Update a board remotely and replace the cached record with the result.
    ///
    /// # Errors
    ///
    /// Returns [`BoardsError::FetchFailed`] if the collaborator rejects the update.
    pub async fn update_board(&self, board_id: &str, changes: BoardChanges) -> Result<Board, BoardsError> {
        let request_id = Uuid::new_v4();
        self.run(
            Operation::UpdateBoard,
            |phase| BoardEvent::UpdateBoard { request_id, board_id: board_id.to_owned(), phase },
            self.api.update_board(board_id, &changes),
        )
        .await
    }

    /// Delete a board. The cached record is dropped before the collaborator
    /// is called and is not restored if the delete fails.
    ///
    /// # Errors
    ///
    /// Returns [`BoardsError::FetchFailed`] if the collaborator rejects the delete.
    pub async fn delete_board(&self, board_id: &str) -> Result<(), BoardsError> {
        let request_id = Uuid::new_v4();
        self.run(
            Operation::DeleteBoard,
            |phase| BoardEvent::DeleteBoard { request_id, board_id: board_id.to_owned(), phase },
            self.api.delete_board(board_id),
        )
        .await
    }

    async fn run<T, F>(
        &self,
        operation: Operation,
        event: impl Fn(Phase<T>) -> BoardEvent,
        call: F,
    ) -> Result<T, BoardsError>
    where
        T: Clone,
        F: Future<Output = Result<T, ApiError>>,
    {
        let requested = event(Phase::Requested);
        let request_id = requested.request_id();
        self.dispatch(requested).await;

        match call.await {
            Ok(value) => {
                self.dispatch(event(Phase::Succeeded(value.clone()))).await;
                info!(%operation, %request_id, ok = true, "boards: operation settled");
                Ok(value)
            }
            Err(source) => {
                let err = BoardsError::FetchFailed { operation, source };
                info!(%operation, %request_id, ok = false, code = err.error_code(), "boards: operation settled");
                self.dispatch(event(Phase::Failed(err.clone()))).await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
