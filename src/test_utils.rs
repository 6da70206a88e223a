//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures for tests across the crate, so setup code is not
//! copy-pasted between modules.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::{CategoryList, PeriodicSummary, Transaction, TxnKind};
use crate::state::LoadedBatch;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    #[must_use]
    pub fn expense(id: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: "2024-01-05".to_string(),
            amount,
            kind: TxnKind::Expense,
            category: category.to_string(),
            description: None,
        }
    }

    #[must_use]
    pub fn income(id: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            kind: TxnKind::Income,
            ..Self::expense(id, amount, category)
        }
    }

    #[must_use]
    pub fn with_description(txn: Transaction, description: &str) -> Transaction {
        Transaction {
            description: Some(description.to_string()),
            ..txn
        }
    }
}

pub struct CategoryMother;

impl CategoryMother {
    #[must_use]
    pub fn standard() -> CategoryList {
        CategoryList {
            income_categories: vec!["Salary".to_string(), "Bonus".to_string()],
            expense_categories: vec![
                "Food".to_string(),
                "Transport".to_string(),
                "Rent".to_string(),
            ],
        }
    }

    #[must_use]
    pub fn empty() -> CategoryList {
        CategoryList::default()
    }
}

pub struct SummaryMother;

impl SummaryMother {
    #[must_use]
    pub fn with_totals(income: f64, expenses: f64) -> PeriodicSummary {
        PeriodicSummary {
            income,
            expenses,
            net: income - expenses,
            ..PeriodicSummary::default()
        }
    }

    #[must_use]
    pub fn formatted(income: f64, expenses: f64) -> PeriodicSummary {
        PeriodicSummary {
            formatted_total_income: Some(format!("${income:.2}")),
            formatted_total_expenses: Some(format!("${expenses:.2}")),
            formatted_total_net: Some(format!("${:.2}", income - expenses)),
            ..Self::with_totals(income, expenses)
        }
    }
}

/// A consistent successful read batch.
#[must_use]
pub fn loaded_batch() -> LoadedBatch {
    LoadedBatch {
        monthly: SummaryMother::with_totals(1250.0, 450.0),
        yearly: SummaryMother::with_totals(15000.0, 5400.0),
        transactions: vec![
            TransactionMother::expense("1", 50.0, "Food"),
            TransactionMother::income("2", 1200.0, "Salary"),
        ],
        categories: CategoryMother::standard(),
        status: "Positive balance".to_string(),
    }
}

// ============================================================================
// Terminal Helpers
// ============================================================================

/// Standard 80x24 terminal backed by a test buffer.
#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("test terminal should build")
}

/// Flattens a rendered buffer into a newline-separated string for
/// content assertions.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
