use super::*;

#[test]
fn view_state_default_is_blank() {
    let view = ViewState::default();
    assert!(view.selected_board_id.is_none());
    assert!(view.search_text.is_none());
    assert!(!view.update_board_modal_open);
}

#[test]
fn select_board_replaces_and_clears() {
    let mut view = ViewState::default();
    view.select_board(Some("not-cached".into()));
    assert_eq!(view.selected_board_id.as_deref(), Some("not-cached"));
    view.select_board(None);
    assert!(view.selected_board_id.is_none());
}

#[test]
fn search_text_keeps_empty_string() {
    let mut view = ViewState::default();
    view.set_search_text("cats");
    view.set_search_text("");
    assert_eq!(view.search_text.as_deref(), Some(""));
}

#[test]
fn update_modal_toggles() {
    let mut view = ViewState::default();
    view.set_update_modal_open(true);
    assert!(view.update_board_modal_open);
    view.set_update_modal_open(false);
    assert!(!view.update_board_modal_open);
}
