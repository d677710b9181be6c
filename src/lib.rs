//! Normalized client-side cache for boards, with remote lifecycle tracking.
//!
//! ARCHITECTURE
//! ============
//! - `table` / `adapter`: id-keyed board storage, ordered newest first, with
//!   upsert/update/remove merge operations.
//! - `lifecycle`: Requested/Succeeded/Failed events for remote operations and
//!   the handler that folds them into the table and pagination window.
//! - `view`: selection, search text and dialog flags.
//! - `state`: the single `BoardsState` plus its action enum and reducer.
//! - `store`: the host that owns the state and drives a [`BoardsApi`].
//!
//! This crate never installs a tracing subscriber; the embedding app does.

mod adapter;
pub mod api;
pub mod config;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod state;
pub mod store;
pub mod table;
pub mod timestamp;
pub mod view;

pub use api::BoardsApi;
pub use config::BoardsConfig;
pub use entity::{Board, BoardChanges, Entity};
pub use error::{ApiError, BoardsError, ErrorCode};
pub use lifecycle::{BoardEvent, BoardPage, Operation, Pagination, Phase};
pub use state::{BoardsAction, BoardsState, reduce};
pub use store::BoardStore;
pub use table::EntityTable;
pub use timestamp::Timestamp;
pub use view::ViewState;
