//! Command pattern for key event handling in the TUI application.
//!
//! Key events are mapped to commands based on the current input context,
//! keeping keybindings testable in isolation from application state.

use crossterm::event::{KeyCode, KeyEvent};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal browsing mode - summary panel and transaction table.
    Main,
    /// The add-transaction form popup is open.
    Form,
    /// A message/notification popup is on top of everything else.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Re-run the full read batch against the API.
    Reload,
    /// Toggle between the monthly and yearly summary view.
    ToggleSummaryPeriod,

    // === Table Navigation ===
    /// Move the table selection down.
    SelectNext,
    /// Move the table selection up.
    SelectPrev,

    // === Add-Transaction Form ===
    /// Open the add-transaction form with a fresh draft.
    OpenForm,
    /// Close the form, discarding the draft.
    FormCancel,
    /// Move focus to the next form field.
    FormNextField,
    /// Move focus to the previous form field.
    FormPrevField,
    /// Type a character into the active field.
    FormInput(char),
    /// Delete the last character of the active field.
    FormBackspace,
    /// Cycle the active field's option forward (kind toggle, next category).
    FormCycleNext,
    /// Cycle the active field's option backward.
    FormCyclePrev,
    /// Validate the draft and submit it to the API.
    FormSubmit,

    // === Popups ===
    /// Dismiss the message popup.
    DismissMessage,

    /// Key is not bound in the current context.
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command for the given input context.
#[must_use]
pub fn map_key(key_event: KeyEvent, context: InputContext) -> AppCommand {
    match context {
        InputContext::Main => map_main_key(key_event),
        InputContext::Form => map_form_key(key_event),
        InputContext::MessagePopup => match key_event.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::DismissMessage,
            _ => AppCommand::Noop,
        },
    }
}

fn map_main_key(key_event: KeyEvent) -> AppCommand {
    match key_event.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('r') => AppCommand::Reload,
        KeyCode::Char('a') => AppCommand::OpenForm,
        KeyCode::Char('v') => AppCommand::ToggleSummaryPeriod,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::SelectNext,
        _ => AppCommand::Noop,
    }
}

fn map_form_key(key_event: KeyEvent) -> AppCommand {
    match key_event.code {
        KeyCode::Esc => AppCommand::FormCancel,
        KeyCode::Enter => AppCommand::FormSubmit,
        KeyCode::Tab | KeyCode::Down => AppCommand::FormNextField,
        KeyCode::BackTab | KeyCode::Up => AppCommand::FormPrevField,
        KeyCode::Left => AppCommand::FormCyclePrev,
        KeyCode::Right => AppCommand::FormCycleNext,
        KeyCode::Backspace => AppCommand::FormBackspace,
        KeyCode::Char(c) => AppCommand::FormInput(c),
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
