//! Periodic summaries and the financial status pill.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::transaction::format_amount;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

// ============================================================================
// Periodic Summary
// ============================================================================

/// Aggregated income/expense/net totals over a calendar window.
///
/// The server may include pre-formatted currency strings; the display
/// helpers fall back to local formatting when they are absent. Every field
/// is defaulted since report endpoints have historically omitted several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodicSummary {
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub formatted_total_income: Option<String>,
    pub formatted_total_expenses: Option<String>,
    pub formatted_total_net: Option<String>,
    pub generated_date: Option<String>,
    pub start_day: Option<String>,
    pub end_day: Option<String>,
}

impl PeriodicSummary {
    /// Total income, preferring the server-formatted string.
    #[must_use]
    pub fn income_display(&self) -> String {
        self.formatted_total_income
            .clone()
            .unwrap_or_else(|| format_amount(self.income))
    }

    /// Total expenses, preferring the server-formatted string.
    #[must_use]
    pub fn expenses_display(&self) -> String {
        self.formatted_total_expenses
            .clone()
            .unwrap_or_else(|| format_amount(self.expenses))
    }

    /// Net amount, preferring the server-formatted string.
    #[must_use]
    pub fn net_display(&self) -> String {
        self.formatted_total_net
            .clone()
            .unwrap_or_else(|| format_amount(self.net))
    }
}

// ============================================================================
// Summary Period
// ============================================================================

/// Which calendar window the summary panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryPeriod {
    #[default]
    Month,
    Year,
}

impl SummaryPeriod {
    /// Panel title for this period.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SummaryPeriod::Month => "Current Month Summary",
            SummaryPeriod::Year => "Current Year Summary",
        }
    }

    /// The other period.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            SummaryPeriod::Month => SummaryPeriod::Year,
            SummaryPeriod::Year => SummaryPeriod::Month,
        }
    }
}

// ============================================================================
// Financial Status
// ============================================================================

/// Pill color for a financial status string.
///
/// The server sends free text such as "Positive balance this month";
/// classification is by substring, with a neutral color for anything else.
#[must_use]
pub fn status_color(status: &str) -> Color {
    if status.contains("Positive") {
        SUCCESS_COLOR
    } else if status.contains("Negative") {
        ERROR_COLOR
    } else if status.contains("Zero") {
        WARNING_COLOR
    } else {
        MUTED_COLOR
    }
}

// ============================================================================
// Tests
// ============================================================================
