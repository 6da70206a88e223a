//! Report endpoints: periodic summaries and financial status.

use serde::Deserialize;

use super::{LedgerClient, decode_body};
use crate::domain::{ApiError, PeriodicSummary};

// ============================================================================
// Wire Envelopes
// ============================================================================

/// Wrapper around a periodic summary.
///
/// The monthly endpoint wraps the payload in `monthlySummary`. The yearly
/// endpoint is shaped the same way but its wrapper key is not pinned down
/// anywhere authoritative, so both keys are accepted.
#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    #[serde(alias = "monthlySummary", alias = "yearlySummary")]
    summary: PeriodicSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusEnvelope {
    financial_status: String,
}

// ============================================================================
// Client Methods
// ============================================================================

impl LedgerClient {
    /// Fetch the summary for the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn fetch_monthly_summary(&self) -> Result<PeriodicSummary, ApiError> {
        self.fetch_summary("/reports/monthly-summary").await
    }

    /// Fetch the summary for the current year.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn fetch_yearly_summary(&self) -> Result<PeriodicSummary, ApiError> {
        self.fetch_summary("/reports/yearly-summary").await
    }

    /// Fetch the financial status classification string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn fetch_financial_status(&self) -> Result<String, ApiError> {
        let (status, body) = self.get_parts("/reports/financial-status").await?;
        let envelope: StatusEnvelope = decode_body(status, &body)?;
        Ok(envelope.financial_status)
    }

    async fn fetch_summary(&self, path: &str) -> Result<PeriodicSummary, ApiError> {
        let (status, body) = self.get_parts(path).await?;
        let envelope: SummaryEnvelope = decode_body(status, &body)?;
        Ok(envelope.summary)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_monthly_wrapper_key() {
        let body = r#"{
            "monthlySummary": {
                "income": 1000,
                "expenses": 400,
                "net": 600,
                "formattedTotalNet": "$600.00"
            }
        }"#;
        let envelope: SummaryEnvelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.summary.net, 600.0);
        assert_eq!(envelope.summary.formatted_total_net.as_deref(), Some("$600.00"));
    }

    #[test]
    fn decodes_the_yearly_wrapper_key() {
        let body = r#"{"yearlySummary": {"income": 12, "expenses": 3, "net": 9}}"#;
        let envelope: SummaryEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.summary.income, 12.0);
    }

    #[test]
    fn decodes_the_status_envelope() {
        let envelope: StatusEnvelope =
            serde_json::from_str(r#"{"financialStatus":"Positive balance"}"#).unwrap();
        assert_eq!(envelope.financial_status, "Positive balance");
    }
}
