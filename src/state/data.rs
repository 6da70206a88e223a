//! Data state for the LazyLedger TUI.
//!
//! Holds everything fetched from the ledger API plus the loading flags and
//! the single inline-error slot. The lifecycle is strictly
//! `idle -> loading -> {success, error}` per read batch: a batch replaces
//! every resource on success and leaves all previously loaded data
//! untouched on failure.

use crate::domain::{CategoryList, PeriodicSummary, SummaryPeriod, Transaction};

// ============================================================================
// Loading Flags
// ============================================================================

/// Independent loading flags, one per fetched resource.
///
/// The monthly and yearly summaries are one logical resource pair and
/// share the `summary` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub summary: bool,
    pub transactions: bool,
    pub categories: bool,
    pub status: bool,
}

impl LoadingFlags {
    pub fn set_all(&mut self, on: bool) {
        self.summary = on;
        self.transactions = on;
        self.categories = on;
        self.status = on;
    }

    /// Whether any resource is still loading.
    #[must_use]
    pub fn any(&self) -> bool {
        self.summary || self.transactions || self.categories || self.status
    }
}

// ============================================================================
// Loaded Batch
// ============================================================================

/// The result of one successful all-or-nothing read batch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBatch {
    pub monthly: PeriodicSummary,
    pub yearly: PeriodicSummary,
    pub transactions: Vec<Transaction>,
    pub categories: CategoryList,
    pub status: String,
}

// ============================================================================
// Data State
// ============================================================================

/// All data displayed by the application.
#[derive(Debug, Default)]
pub struct DataState {
    pub monthly_summary: Option<PeriodicSummary>,
    pub yearly_summary: Option<PeriodicSummary>,
    pub transactions: Vec<Transaction>,
    pub categories: Option<CategoryList>,
    pub financial_status: Option<String>,

    /// Per-resource loading flags for the in-flight batch.
    pub loading: LoadingFlags,
    /// Message of the last failed batch, shown inline until the next batch.
    pub last_error: Option<String>,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every resource as loading and clears the inline error.
    pub fn begin_loading(&mut self) {
        self.loading.set_all(true);
        self.last_error = None;
    }

    /// Applies a successful batch, replacing every resource.
    pub fn apply(&mut self, batch: LoadedBatch) {
        self.monthly_summary = Some(batch.monthly);
        self.yearly_summary = Some(batch.yearly);
        self.transactions = batch.transactions;
        self.categories = Some(batch.categories);
        self.financial_status = Some(batch.status);
        self.loading.set_all(false);
        self.last_error = None;
    }

    /// Records a failed batch. Previously loaded data stays untouched.
    pub fn fail(&mut self, message: String) {
        self.loading.set_all(false);
        self.last_error = Some(message);
    }

    /// The summary for the given period, if loaded.
    #[must_use]
    pub fn summary_for(&self, period: SummaryPeriod) -> Option<&PeriodicSummary> {
        match period {
            SummaryPeriod::Month => self.monthly_summary.as_ref(),
            SummaryPeriod::Year => self.yearly_summary.as_ref(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{CategoryMother, SummaryMother, TransactionMother};

    fn batch() -> LoadedBatch {
        LoadedBatch {
            monthly: SummaryMother::with_totals(1000.0, 400.0),
            yearly: SummaryMother::with_totals(9000.0, 4200.0),
            transactions: vec![TransactionMother::expense("1", 50.0, "Food")],
            categories: CategoryMother::standard(),
            status: "Positive balance".to_string(),
        }
    }

    #[test]
    fn begin_loading_raises_all_flags_and_clears_the_error() {
        let mut data = DataState::new();
        data.last_error = Some("old failure".to_string());

        data.begin_loading();

        assert!(data.loading.summary);
        assert!(data.loading.transactions);
        assert!(data.loading.categories);
        assert!(data.loading.status);
        assert_eq!(data.last_error, None);
    }

    #[test]
    fn apply_replaces_every_resource_and_drops_the_flags() {
        let mut data = DataState::new();
        data.begin_loading();

        data.apply(batch());

        assert!(!data.loading.any());
        assert_eq!(data.transactions.len(), 1);
        assert_eq!(data.financial_status.as_deref(), Some("Positive balance"));
        assert_eq!(
            data.summary_for(SummaryPeriod::Year).unwrap().income,
            9000.0
        );
    }

    #[test]
    fn fail_keeps_previously_loaded_data() {
        let mut data = DataState::new();
        data.apply(batch());

        data.begin_loading();
        data.fail("connection refused".to_string());

        assert!(!data.loading.any());
        assert_eq!(data.last_error.as_deref(), Some("connection refused"));
        // The earlier successful load is still visible
        assert_eq!(data.transactions.len(), 1);
        assert!(data.monthly_summary.is_some());
        assert!(data.categories.is_some());
    }
}
