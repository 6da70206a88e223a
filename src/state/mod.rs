//! Application state for the LazyLedger TUI.
//!
//! The state is decomposed into:
//!
//! - [`DataState`] - everything fetched from the ledger API, with loading
//!   flags and the inline-error slot
//! - [`UiState`] - popups, the add-transaction form, table selection
//! - [`TransactionForm`] - the form draft itself
//!
//! The [`App`] owns all of it plus the API client and the message channel
//! that background fetch tasks report back on.

use tokio::sync::mpsc;

use crate::client::LedgerClient;
use crate::commands::{AppCommand, InputContext};
use crate::config::ApiConfig;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod data;
pub mod form;
mod lifecycle;
pub mod ui_state;


// ============================================================================
// Re-exports
// ============================================================================

pub use data::{DataState, LoadedBatch, LoadingFlags};
pub use form::{FormField, TransactionForm};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetch tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Every read in the batch succeeded.
    BatchLoaded(Box<LoadedBatch>),
    /// At least one read failed; carries the first error message.
    BatchFailed(String),
    /// The add-transaction POST succeeded with the new identifier.
    TransactionSaved { id: String },
    /// The add-transaction POST failed.
    SaveFailed(String),
}

// ============================================================================
// Application
// ============================================================================

/// The main application struct holding all state.
pub struct App {
    pub data: DataState,
    pub ui: UiState,
    pub config: ApiConfig,
    pub exit: bool,

    pub(crate) client: LedgerClient,
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    /// Determines which keybindings are active right now.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.ui.popup_state != PopupState::None {
            InputContext::MessagePopup
        } else if self.ui.is_form_open() {
            InputContext::Form
        } else {
            InputContext::Main
        }
    }

    /// Executes an application command, mutating state and spawning
    /// background work as needed.
    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => self.exit = true,
            AppCommand::Reload => self.load_all(),
            AppCommand::ToggleSummaryPeriod => {
                self.ui.summary_period = self.ui.summary_period.toggled();
            }

            // === Table Navigation ===
            AppCommand::SelectNext => self.ui.select_next(self.data.transactions.len()),
            AppCommand::SelectPrev => self.ui.select_prev(self.data.transactions.len()),

            // === Add-Transaction Form ===
            AppCommand::OpenForm => self.ui.open_form(),
            AppCommand::FormCancel => self.ui.close_form(),
            AppCommand::FormNextField => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.focus_next();
                }
            }
            AppCommand::FormPrevField => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.focus_prev();
                }
            }
            AppCommand::FormInput(c) => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.push_char(c);
                }
            }
            AppCommand::FormBackspace => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.backspace();
                }
            }
            AppCommand::FormCycleNext => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.cycle(1, self.data.categories.as_ref());
                }
            }
            AppCommand::FormCyclePrev => {
                if let Some(form) = self.ui.form.as_mut() {
                    form.cycle(-1, self.data.categories.as_ref());
                }
            }
            AppCommand::FormSubmit => self.submit_form(),

            // === Popups ===
            AppCommand::DismissMessage => self.ui.dismiss_message(),

            AppCommand::Noop => {}
        }
    }

    /// Validates the form draft and submits it to the API.
    ///
    /// Validation failures surface as a message popup over the still-open
    /// form; the draft is kept so the user can correct it.
    fn submit_form(&mut self) {
        let Some(form) = self.ui.form.as_ref() else {
            return;
        };

        match form.validate(self.data.categories.as_ref()) {
            Ok(input) => self.submit_transaction(input),
            Err(message) => self.ui.show_message(message),
        }
    }

    /// Applies a message from a background task to the state.
    pub(crate) fn process_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::BatchLoaded(batch) => {
                self.data.apply(*batch);
                self.ui.clamp_selection(self.data.transactions.len());
            }
            AppMessage::BatchFailed(message) => {
                tracing::warn!(%message, "read batch failed");
                self.data.fail(message);
            }
            AppMessage::TransactionSaved { id } => {
                // Success closes the form (dropping the draft), confirms,
                // and refreshes every resource, clearing any prior error.
                self.ui.close_form();
                self.ui.show_message(format!("Transaction {id} added."));
                self.load_all();
            }
            AppMessage::SaveFailed(message) => {
                tracing::warn!(%message, "add transaction failed");
                // The form stays open with its draft so the user can retry.
                self.ui.show_message(format!("Error: {message}"));
            }
        }
    }
}
