//! Error types for board operations.
//!
//! ERROR HANDLING
//! ==============
//! Cache operations never fail: updating or removing an unknown id is a
//! silent no-op. Errors only come from the remote collaborator and are
//! handed back to whoever started the operation. A failed delete is not an
//! error of its own; the board was already dropped optimistically and stays
//! dropped.

use crate::lifecycle::Operation;

/// Grepable code and retry hint attached to an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Failure reported by a [`BoardsApi`](crate::api::BoardsApi) implementation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server has no board with this id.
    #[error("board not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("request rejected: status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed (connection, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_BOARD_NOT_FOUND",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Decode(_) => "E_DECODE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Rejected { status: 429 | 500..=599, .. })
    }
}

/// Error surfaced to callers of [`BoardStore`](crate::store::BoardStore) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardsError {
    /// The collaborator rejected the operation. For a list fetch the cache
    /// was left untouched.
    #[error("{operation} failed: {source}")]
    FetchFailed {
        operation: Operation,
        #[source]
        source: ApiError,
    },
}

impl BoardsError {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::FetchFailed { operation, .. } => *operation,
        }
    }
}

impl ErrorCode for BoardsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } => "E_FETCH_FAILED",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::FetchFailed { source, .. } => source.retryable(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
