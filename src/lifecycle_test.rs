use super::*;
use crate::error::ApiError;
use crate::timestamp::Timestamp;

fn board(id: &str, ms: i64) -> Board {
    Board::new(id, Timestamp::Millis(ms))
}

fn failure(operation: Operation) -> BoardsError {
    BoardsError::FetchFailed { operation, source: ApiError::Transport("offline".into()) }
}

fn list(phase: Phase<BoardPage>) -> BoardEvent {
    BoardEvent::ListBoards { request_id: Uuid::nil(), phase }
}

fn fresh() -> (EntityTable<Board>, Pagination) {
    (EntityTable::new(), Pagination::default())
}

// =============================================================
// list
// =============================================================

#[test]
fn list_requested_sets_loading_without_touching_table() {
    let (mut table, mut pagination) = fresh();
    table.upsert_one(board("a", 1));
    let before = table.clone();

    apply_event(&mut table, &mut pagination, list(Phase::Requested));

    assert!(pagination.is_loading);
    assert_eq!(table, before);
}

#[test]
fn list_failed_clears_loading_and_keeps_pagination() {
    let (mut table, mut pagination) = fresh();
    apply_event(&mut table, &mut pagination, list(Phase::Requested));
    apply_event(&mut table, &mut pagination, list(Phase::Failed(failure(Operation::ListBoards))));

    assert!(!pagination.is_loading);
    assert_eq!(pagination, Pagination::default());
    assert!(table.is_empty());
}

#[test]
fn list_succeeded_overwrites_pagination_and_keeps_other_pages() {
    let (mut table, mut pagination) = fresh();
    table.upsert_one(board("first-page", 1));
    apply_event(&mut table, &mut pagination, list(Phase::Requested));

    let page = BoardPage { items: vec![board("b1", 3), board("b2", 2)], offset: 50, limit: 50, total: 120 };
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(page)));

    assert!(!pagination.is_loading);
    assert_eq!((pagination.offset, pagination.limit, pagination.total), (50, 50, 120));
    assert_eq!(table.select_ids(), ["b1", "b2", "first-page"]);
}

#[test]
fn list_succeeded_does_not_merge_pagination_with_prior_values() {
    let (mut table, mut pagination) = fresh();
    let wide = BoardPage { items: Vec::new(), offset: 100, limit: 100, total: 500 };
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(wide)));
    let narrow = BoardPage { items: Vec::new(), offset: 0, limit: 10, total: 3 };
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(narrow)));

    assert_eq!((pagination.offset, pagination.limit, pagination.total), (0, 10, 3));
}

#[test]
fn list_succeeded_with_zero_limit_keeps_previous_limit() {
    let (mut table, mut pagination) = fresh();
    let page = BoardPage { items: vec![board("a", 1)], offset: 50, limit: 0, total: 120 };
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(page)));

    assert_eq!((pagination.offset, pagination.limit, pagination.total), (50, DEFAULT_PAGE_LIMIT, 120));
    assert_eq!(pagination.next_offset(), 100);
    assert!(pagination.has_more());
}

#[test]
fn page_with_float_timestamp_decodes() {
    let page: BoardPage = serde_json::from_value(serde_json::json!({
        "items": [
            {"board_id": "a", "updated_at": 1_687_319_824_370.0},
            {"board_id": "b", "updated_at": 1_687_319_824_371_i64}
        ],
        "offset": 0,
        "limit": 50,
        "total": 2
    }))
    .expect("page");

    let (mut table, mut pagination) = fresh();
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(page)));
    assert_eq!(table.select_ids(), ["b", "a"]);
}

#[test]
fn overlapping_list_fetches_clear_loading_on_first_settle() {
    let (mut table, mut pagination) = fresh();
    apply_event(&mut table, &mut pagination, list(Phase::Requested));
    apply_event(&mut table, &mut pagination, list(Phase::Requested));
    apply_event(&mut table, &mut pagination, list(Phase::Failed(failure(Operation::ListBoards))));

    assert!(!pagination.is_loading);
}

// =============================================================
// create / update
// =============================================================

#[test]
fn create_succeeded_upserts_board() {
    let (mut table, mut pagination) = fresh();
    let event = BoardEvent::CreateBoard { request_id: Uuid::nil(), phase: Phase::Succeeded(board("new", 9)) };
    apply_event(&mut table, &mut pagination, event);

    assert!(table.select_by_id("new").is_some());
    assert!(!pagination.is_loading);
}

#[test]
fn create_requested_and_failed_leave_state_alone() {
    let (mut table, mut pagination) = fresh();
    for phase in [Phase::Requested, Phase::Failed(failure(Operation::CreateBoard))] {
        apply_event(&mut table, &mut pagination, BoardEvent::CreateBoard { request_id: Uuid::nil(), phase });
    }
    assert!(table.is_empty());
    assert_eq!(pagination, Pagination::default());
}

#[test]
fn update_succeeded_fully_replaces_board() {
    let (mut table, mut pagination) = fresh();
    table.upsert_one(board("a", 1).with_field("name", "old").with_field("cover", "img"));

    let event = BoardEvent::UpdateBoard {
        request_id: Uuid::nil(),
        board_id: "a".into(),
        phase: Phase::Succeeded(board("a", 2).with_field("name", "new")),
    };
    apply_event(&mut table, &mut pagination, event);

    assert_eq!(table.select_by_id("a"), Some(&board("a", 2).with_field("name", "new")));
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_requested_removes_board_immediately() {
    let (mut table, mut pagination) = fresh();
    table.upsert_many(vec![board("x", 1), board("y", 2)]);

    let event = BoardEvent::DeleteBoard { request_id: Uuid::nil(), board_id: "x".into(), phase: Phase::Requested };
    apply_event(&mut table, &mut pagination, event);

    assert!(table.select_by_id("x").is_none());
    assert_eq!(table.select_ids(), ["y"]);
}

#[test]
fn delete_failed_does_not_restore_board() {
    let (mut table, mut pagination) = fresh();
    table.upsert_one(board("x", 1));

    for phase in [Phase::Requested, Phase::Failed(failure(Operation::DeleteBoard))] {
        let event = BoardEvent::DeleteBoard { request_id: Uuid::nil(), board_id: "x".into(), phase };
        apply_event(&mut table, &mut pagination, event);
    }

    assert!(table.is_empty());
}

#[test]
fn stale_list_success_after_delete_reinserts_board() {
    let (mut table, mut pagination) = fresh();
    table.upsert_one(board("x", 1));

    let delete = BoardEvent::DeleteBoard { request_id: Uuid::nil(), board_id: "x".into(), phase: Phase::Requested };
    apply_event(&mut table, &mut pagination, delete);
    let stale = BoardPage { items: vec![board("x", 1)], offset: 0, limit: 50, total: 1 };
    apply_event(&mut table, &mut pagination, list(Phase::Succeeded(stale)));

    assert_eq!(table.select_ids(), ["x"]);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn pagination_next_page_window() {
    let pagination = Pagination { offset: 50, limit: 50, total: 120, is_loading: false };
    assert_eq!(pagination.next_offset(), 100);
    assert!(pagination.has_more());

    let last = Pagination { offset: 100, limit: 50, total: 120, is_loading: false };
    assert!(!last.has_more());
}

#[test]
fn event_reports_operation_and_request_id() {
    let id = Uuid::new_v4();
    let event = BoardEvent::DeleteBoard { request_id: id, board_id: "x".into(), phase: Phase::Requested };
    assert_eq!(event.operation(), Operation::DeleteBoard);
    assert_eq!(event.request_id(), id);
    assert_eq!(Operation::DeleteBoard.to_string(), "board:delete");
}
