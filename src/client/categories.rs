//! Category list fetching.

use serde::Deserialize;

use super::{LedgerClient, decode_body};
use crate::domain::{ApiError, CategoryList};

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: CategoryList,
}

impl LedgerClient {
    /// Fetch the income and expense category lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn fetch_categories(&self) -> Result<CategoryList, ApiError> {
        let (status, body) = self.get_parts("/categories").await?;
        let envelope: CategoriesEnvelope = decode_body(status, &body)?;
        Ok(envelope.categories)
    }
}
