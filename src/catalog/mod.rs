//! Catalog adapters.
//!
//! The deck engine does not know how cards are fetched. It consumes a
//! [`Catalog`]: an async `search` returning raw records plus a `map_item`
//! normalizer turning one raw record into a deck item.
//!
//! Transport, pagination and rate limiting are the adapter's business.

pub mod memory;

use std::future::Future;

pub use memory::{CatalogRecord, MemoryCatalog};

use crate::rules::ErrorCategory;

/// Message shown when a lookup fails without a usable error of its own.
pub const FETCH_FAILED: &str = "Failed to fetch cards. Please try again.";

/// One page of raw search results.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogPage<R> {
    /// Raw records, in catalog order.
    pub data: Vec<R>,

    /// Error reported by the backend alongside (or instead of) data.
    pub error: Option<String>,
}

impl<R> CatalogPage<R> {
    /// Successful page.
    #[must_use]
    pub fn ok(data: Vec<R>) -> Self {
        Self { data, error: None }
    }

    /// Page carrying a backend error.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Catalog failures that never produced a page.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The lookup itself failed (network, backend crash, ...).
    #[error("catalog transport failure: {0}")]
    Transport(String),

    /// A bundled card list could not be decoded.
    #[error("failed to decode catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Always [`ErrorCategory::Transport`].
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Transport
    }
}

/// Source of searchable cards.
///
/// Implementors may write `async fn search`.
pub trait Catalog {
    /// Record shape returned by the backend.
    type Raw;

    /// Normalized item shape.
    type Item;

    /// Look up cards matching `query`.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<CatalogPage<Self::Raw>, CatalogError>> + Send;

    /// Normalize one raw record.
    fn map_item(&self, raw: Self::Raw) -> Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_constructors() {
        let ok = CatalogPage::ok(vec![1, 2, 3]);
        assert_eq!(ok.data.len(), 3);
        assert!(ok.error.is_none());

        let failed: CatalogPage<u32> = CatalogPage::failed("No card matching your query was found");
        assert!(failed.data.is_empty());
        assert_eq!(
            failed.error.as_deref(),
            Some("No card matching your query was found")
        );
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Transport("connection reset".to_string());
        assert_eq!(err.to_string(), "catalog transport failure: connection reset");
        assert_eq!(err.category(), ErrorCategory::Transport);
    }
}
