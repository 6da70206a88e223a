//! Domain types for the LazyLedger expense tracker.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error type for ledger API operations
//! - [`transaction`] - Transaction records and the add-transaction input
//! - [`category`] - Income/expense category lists
//! - [`summary`] - Periodic summaries and financial status helpers

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category;
pub mod error;
pub mod summary;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use category::CategoryList;
pub use error::ApiError;
pub use summary::{PeriodicSummary, SummaryPeriod, status_color};
pub use transaction::{NewTransaction, Transaction, TxnKind, format_amount};
