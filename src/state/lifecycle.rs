//! Application lifecycle: construction, the main event loop, and the
//! background fetch tasks.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use super::{App, AppMessage, DataState, LoadedBatch, UiState};
use crate::client::LedgerClient;
use crate::commands::map_key;
use crate::config::ApiConfig;
use crate::domain::{ApiError, CategoryList, NewTransaction, PeriodicSummary, Transaction};
use crate::tui::Tui;
use crate::ui;

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance for the given API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = LedgerClient::new(&config.base_url)?;

        Ok(Self {
            data: DataState::new(),
            ui: UiState::new(),
            config,
            exit: false,
            client,
            message_tx,
            message_rx,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.load_all();

        let tick_rate = Duration::from_millis(100);
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        let command = map_key(key, self.input_context());
                        self.execute_command(command);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Drains pending messages from background tasks.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.process_message(message);
        }
    }

    // ========================================================================
    // Background Fetches
    // ========================================================================

    /// Fires every read concurrently and reports the joined result.
    ///
    /// All loading flags go up before the batch starts and come down when
    /// the single batch message is processed, success or failure. There is
    /// no cancellation or retry; a failed batch waits for a manual reload
    /// or the refresh that follows a successful add.
    pub(crate) fn load_all(&mut self) {
        self.data.begin_loading();

        let client = self.client.clone();
        let sender = self.message_tx.clone();

        tokio::spawn(async move {
            let (monthly, yearly, transactions, categories, status) = tokio::join!(
                client.fetch_monthly_summary(),
                client.fetch_yearly_summary(),
                client.fetch_transactions(),
                client.fetch_categories(),
                client.fetch_financial_status(),
            );

            let message = match collect_batch(monthly, yearly, transactions, categories, status) {
                Ok(batch) => AppMessage::BatchLoaded(Box::new(batch)),
                Err(e) => AppMessage::BatchFailed(e.to_string()),
            };
            let _ = sender.send(message);
        });
    }

    /// Posts a validated transaction in the background.
    pub(crate) fn submit_transaction(&self, input: NewTransaction) {
        let client = self.client.clone();
        let sender = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.add_transaction(&input).await {
                Ok(id) => AppMessage::TransactionSaved { id },
                Err(e) => AppMessage::SaveFailed(e.to_string()),
            };
            let _ = sender.send(message);
        });
    }
}

// ============================================================================
// Batch Assembly
// ============================================================================

/// Joins the individual read results into one all-or-nothing batch.
///
/// The first failure wins; successful sibling reads are discarded rather
/// than partially applied.
fn collect_batch(
    monthly: Result<PeriodicSummary, ApiError>,
    yearly: Result<PeriodicSummary, ApiError>,
    transactions: Result<Vec<Transaction>, ApiError>,
    categories: Result<CategoryList, ApiError>,
    status: Result<String, ApiError>,
) -> Result<LoadedBatch, ApiError> {
    Ok(LoadedBatch {
        monthly: monthly?,
        yearly: yearly?,
        transactions: transactions?,
        categories: categories?,
        status: status?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;
    use crate::test_utils::{CategoryMother, SummaryMother};

    #[test]
    fn collect_batch_succeeds_when_every_read_succeeds() {
        let batch = collect_batch(
            Ok(SummaryMother::with_totals(100.0, 40.0)),
            Ok(SummaryMother::with_totals(1200.0, 480.0)),
            Ok(Vec::new()),
            Ok(CategoryMother::standard()),
            Ok("Positive balance".to_string()),
        )
        .unwrap();

        assert_eq!(batch.status, "Positive balance");
        assert!(batch.transactions.is_empty());
    }

    #[test]
    fn collect_batch_reports_the_first_failure() {
        let result = collect_batch(
            Ok(SummaryMother::with_totals(100.0, 40.0)),
            Err(ApiError::api(500, "yearly report broke")),
            Err(ApiError::api(502, "also broke")),
            Ok(CategoryMother::standard()),
            Ok("Positive balance".to_string()),
        );

        assert_eq!(result.unwrap_err().to_string(), "yearly report broke");
    }
}
