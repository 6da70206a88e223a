//! Income/expense category lists.

use serde::{Deserialize, Serialize};

use super::TxnKind;

// ============================================================================
// Category List
// ============================================================================

/// The two disjoint category lists, one per transaction kind.
///
/// Read-only from the client's perspective; the server owns the lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryList {
    pub income_categories: Vec<String>,
    pub expense_categories: Vec<String>,
}

impl CategoryList {
    /// The category names allowed for the given transaction kind.
    #[must_use]
    pub fn for_kind(&self, kind: TxnKind) -> &[String] {
        match kind {
            TxnKind::Income => &self.income_categories,
            TxnKind::Expense => &self.expense_categories,
        }
    }

    /// Whether the given category is valid for the given kind.
    #[must_use]
    pub fn contains(&self, kind: TxnKind, category: &str) -> bool {
        self.for_kind(kind).iter().any(|name| name == category)
    }
}

// ============================================================================
// Tests
// ============================================================================
