//! Remote boards collaborator contract.
//!
//! The store never talks to the network itself; it drives an implementation
//! of [`BoardsApi`] and records each call's lifecycle.

use crate::entity::{Board, BoardChanges};
use crate::error::ApiError;
use crate::lifecycle::BoardPage;

/// Async access to the remote boards service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait BoardsApi: Send + Sync {
    /// Fetch one page of boards.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the page cannot be decoded.
    async fn list_boards(&self, offset: u64, limit: u64) -> Result<BoardPage, ApiError>;

    /// Create a board from the given fields and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the server rejects the board or the request fails.
    async fn create_board(&self, fields: &BoardChanges) -> Result<Board, ApiError>;

    /// Apply `changes` to a board and return the full updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown board, or another
    /// [`ApiError`] if the request fails.
    async fn update_board(&self, board_id: &str, changes: &BoardChanges) -> Result<Board, ApiError>;

    /// Delete a board.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the server refuses or the request fails.
    async fn delete_board(&self, board_id: &str) -> Result<(), ApiError>;
}
