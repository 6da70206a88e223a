//! Transaction records and the add-transaction input shape.

use serde::{Deserialize, Serialize};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Transaction Kind
// ============================================================================

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxnKind {
    Income,
    Expense,
}

impl TxnKind {
    /// Wire/display form of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Income => "INCOME",
            TxnKind::Expense => "EXPENSE",
        }
    }

    /// Human-friendly label for the form.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Income => "Income",
            TxnKind::Expense => "Expense",
        }
    }

    /// Sign prefix used when rendering amounts.
    #[must_use]
    pub fn sign(&self) -> char {
        match self {
            TxnKind::Income => '+',
            TxnKind::Expense => '-',
        }
    }

    /// Color used for amounts of this kind.
    #[must_use]
    pub fn color(&self) -> ratatui::style::Color {
        match self {
            TxnKind::Income => SUCCESS_COLOR,
            TxnKind::Expense => ERROR_COLOR,
        }
    }

    /// The other kind.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            TxnKind::Income => TxnKind::Expense,
            TxnKind::Expense => TxnKind::Income,
        }
    }
}

// ============================================================================
// Transaction Records
// ============================================================================

/// A recorded income or expense event as returned by the API.
///
/// Records are server-owned: the client only ever creates new ones and
/// never mutates or deletes existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier.
    pub id: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Positive amount; the kind carries the sign.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub category: String,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Signed currency form of the amount, e.g. `-$50.00` for an expense.
    #[must_use]
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), format_amount(self.amount))
    }
}

/// Input for `POST /transactions`.
///
/// The description field is omitted from the JSON body entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats an amount as a currency string with two decimals, e.g. `$50.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&TxnKind::Income).unwrap(), "\"INCOME\"");
        assert_eq!(
            serde_json::to_string(&TxnKind::Expense).unwrap(),
            "\"EXPENSE\""
        );
    }

    #[test]
    fn transaction_deserializes_wire_format() {
        let json = r#"{
            "id": "1",
            "date": "2024-01-05",
            "amount": 50,
            "type": "EXPENSE",
            "category": "Food"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.id, "1");
        assert_eq!(txn.kind, TxnKind::Expense);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.description, None);
        assert_eq!(txn.signed_amount(), "-$50.00");
    }

    #[test]
    fn income_amount_is_positive_and_green() {
        let txn = Transaction {
            id: "2".to_string(),
            date: "2024-02-01".to_string(),
            amount: 1200.5,
            kind: TxnKind::Income,
            category: "Salary".to_string(),
            description: Some("February".to_string()),
        };

        assert_eq!(txn.signed_amount(), "+$1200.50");
        assert_eq!(txn.kind.color(), crate::theme::SUCCESS_COLOR);
    }

    #[test]
    fn new_transaction_omits_missing_description() {
        let input = NewTransaction {
            date: "2024-01-05".to_string(),
            amount: 12.5,
            kind: TxnKind::Expense,
            category: "Food".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&input).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["type"], "EXPENSE");
        assert_eq!(json["amount"], 12.5);
    }

    #[test]
    fn toggled_flips_kind() {
        assert_eq!(TxnKind::Income.toggled(), TxnKind::Expense);
        assert_eq!(TxnKind::Expense.toggled(), TxnKind::Income);
    }
}
