//! UI presentation state: popups, the add-transaction form, table selection.

use ratatui::widgets::TableState;

use super::form::TransactionForm;
use crate::domain::SummaryPeriod;

// ============================================================================
// Popup State
// ============================================================================

/// Blocking notification popup, rendered above everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    None,
    Message(String),
}

// ============================================================================
// UI State
// ============================================================================

/// UI-only state, purely local to this page instance.
#[derive(Debug, Default)]
pub struct UiState {
    pub popup_state: PopupState,
    /// The add-transaction form, present while the modal is open.
    pub form: Option<TransactionForm>,
    pub table_state: TableState,
    pub summary_period: SummaryPeriod,
}

impl Default for PopupState {
    fn default() -> Self {
        Self::None
    }
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Opens the form with a fresh draft.
    pub fn open_form(&mut self) {
        self.form = Some(TransactionForm::new());
    }

    /// Closes the form, dropping the draft.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn dismiss_message(&mut self) {
        self.popup_state = PopupState::None;
    }

    // === Table Selection ===

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |current| (current + 1) % len);
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = self
            .table_state
            .selected()
            .map_or(0, |current| if current == 0 { len - 1 } else { current - 1 });
        self.table_state.select(Some(prev));
    }

    /// Keeps the selection inside the list after the data changed.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut ui = UiState::new();
        ui.select_next(3);
        assert_eq!(ui.table_state.selected(), Some(0));
        ui.select_prev(3);
        assert_eq!(ui.table_state.selected(), Some(2));
        ui.select_next(3);
        assert_eq!(ui.table_state.selected(), Some(0));
    }

    #[test]
    fn selection_ignores_empty_lists() {
        let mut ui = UiState::new();
        ui.select_next(0);
        assert_eq!(ui.table_state.selected(), None);
    }

    #[test]
    fn clamp_selection_tracks_shrinking_data() {
        let mut ui = UiState::new();
        ui.table_state.select(Some(5));

        ui.clamp_selection(3);
        assert_eq!(ui.table_state.selected(), Some(2));

        ui.clamp_selection(0);
        assert_eq!(ui.table_state.selected(), None);

        ui.clamp_selection(4);
        assert_eq!(ui.table_state.selected(), Some(0));
    }

    #[test]
    fn form_open_close_is_local_state_only() {
        let mut ui = UiState::new();
        assert!(!ui.is_form_open());

        ui.open_form();
        assert!(ui.is_form_open());

        ui.close_form();
        assert!(!ui.is_form_open());
    }
}
