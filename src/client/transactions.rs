//! Transaction list fetching and creation.

use reqwest::StatusCode;
use serde::Deserialize;

use super::{LedgerClient, decode_body};
use crate::domain::{ApiError, NewTransaction, Transaction};

// ============================================================================
// Wire Envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
struct TransactionsEnvelope {
    transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTransactionEnvelope {
    transaction_id: String,
}

// ============================================================================
// Client Methods
// ============================================================================

impl LedgerClient {
    /// Fetch all recorded transactions.
    ///
    /// A `204 No Content` response means the ledger is empty and yields an
    /// empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let (status, body) = self.get_parts("/transactions").await?;
        decode_transactions(status, &body)
    }

    /// Record a new transaction and return its server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the input.
    pub async fn add_transaction(&self, input: &NewTransaction) -> Result<String, ApiError> {
        let (status, body) = self.post_parts("/transactions", input).await?;
        let envelope: AddTransactionEnvelope = decode_body(status, &body)?;
        Ok(envelope.transaction_id)
    }
}

/// Decodes the transactions response, treating `204` as an empty ledger.
pub(crate) fn decode_transactions(
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<Transaction>, ApiError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(Vec::new());
    }

    let envelope: TransactionsEnvelope = decode_body(status, body)?;
    Ok(envelope.transactions)
}

// ============================================================================
// Tests
// ============================================================================
