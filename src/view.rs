//! Board-picker view state kept next to the cache.
//!
//! DESIGN
//! ======
//! Consumers read the cache and these fields together, but nothing here
//! touches the table. `selected_board_id` may name a board that is not
//! cached; no referential check is made.

/// Selection, search and dialog flags for board views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Board the user picked, if any.
    pub selected_board_id: Option<String>,
    /// Free-form filter text, interpreted by consumers.
    pub search_text: Option<String>,
    /// Whether the update-board dialog is showing.
    pub update_board_modal_open: bool,
}

impl ViewState {
    pub fn select_board(&mut self, board_id: Option<String>) {
        self.selected_board_id = board_id;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = Some(text.into());
    }

    pub fn set_update_modal_open(&mut self, open: bool) {
        self.update_board_modal_open = open;
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
