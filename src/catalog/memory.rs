//! In-process catalog over a fixed card list.
//!
//! Useful for bundled card data and for tests. Search is a
//! case-insensitive substring match on the record name; an empty query
//! returns everything.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{Catalog, CatalogError, CatalogPage};

/// What the memory catalog needs to search a raw record.
pub trait CatalogRecord {
    fn record_name(&self) -> &str;
}

/// Catalog backed by a `Vec` of raw records.
///
/// ## Example
///
/// ```
/// use ccg_deck::catalog::MemoryCatalog;
/// use ccg_deck::games::generic;
///
/// let catalog = MemoryCatalog::from_json(
///     r#"[{"id": 1, "name": "Forest"}, {"id": 2, "name": "Island"}]"#,
///     generic::map_card,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// ```
pub struct MemoryCatalog<R, T> {
    records: Vec<R>,
    mapper: Arc<dyn Fn(R) -> T + Send + Sync>,
}

impl<R, T> MemoryCatalog<R, T> {
    /// Create a catalog from records and a normalizer.
    pub fn new<F>(records: Vec<R>, mapper: F) -> Self
    where
        F: Fn(R) -> T + Send + Sync + 'static,
    {
        Self {
            records,
            mapper: Arc::new(mapper),
        }
    }

    /// Decode records from a JSON array.
    pub fn from_json<F>(json: &str, mapper: F) -> Result<Self, CatalogError>
    where
        R: DeserializeOwned,
        F: Fn(R) -> T + Send + Sync + 'static,
    {
        let records: Vec<R> = serde_json::from_str(json)?;
        Ok(Self::new(records, mapper))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: CatalogRecord + Clone, T> MemoryCatalog<R, T> {
    fn matching(&self, query: &str) -> Vec<R> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|r| r.record_name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl<R, T> Catalog for MemoryCatalog<R, T>
where
    R: CatalogRecord + Clone + Send + Sync,
    T: Send + Sync,
{
    type Raw = R;
    type Item = T;

    async fn search(&self, query: &str) -> Result<CatalogPage<R>, CatalogError> {
        Ok(CatalogPage::ok(self.matching(query)))
    }

    fn map_item(&self, raw: R) -> T {
        (self.mapper)(raw)
    }
}

impl<R, T> fmt::Debug for MemoryCatalog<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCatalog")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}
