//! Zone configuration types.
//!
//! Profiles describe their deck partitions with `ZoneConfig`: an id, a
//! display name, an optional capacity and an eligibility predicate.
//! The engine never hardcodes zones - "main", "extra" and friends all
//! come from a profile.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Zone identifier. Profiles define what zones exist.
///
/// Ids are plain strings so profiles can declare them as constants:
///
/// ```
/// use ccg_deck::zones::ZoneId;
///
/// const SIDE: ZoneId = ZoneId::from_static("side");
/// assert_eq!(SIDE, ZoneId::new("side"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(Cow<'static, str>);

impl ZoneId {
    /// Create a zone id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Create a zone id from a static string (usable in `const`).
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ZoneId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

/// Eligibility predicate for a zone. Must be pure.
pub type CardFilter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Configuration for a single zone.
pub struct ZoneConfig<T> {
    /// Unique identifier for this zone.
    pub id: ZoneId,

    /// Human-readable name, used in capacity messages.
    pub name: String,

    /// Maximum cards allowed. `None` for unlimited.
    pub max_cards: Option<usize>,

    /// Which items belong here.
    pub filter: CardFilter<T>,
}

impl<T> ZoneConfig<T> {
    /// Create an unbounded zone that accepts every item.
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_cards: None,
            filter: Arc::new(|_| true),
        }
    }

    /// Set maximum card limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = Some(max);
        self
    }

    /// Set the eligibility predicate.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    /// Does this zone accept the item?
    #[must_use]
    pub fn accepts(&self, item: &T) -> bool {
        (self.filter)(item)
    }

    /// Would one more card overflow this zone?
    #[must_use]
    pub fn is_full(&self, current: usize) -> bool {
        self.max_cards.is_some_and(|max| current >= max)
    }
}

impl<T> Clone for ZoneConfig<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            max_cards: self.max_cards,
            filter: Arc::clone(&self.filter),
        }
    }
}

impl<T> fmt::Debug for ZoneConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("max_cards", &self.max_cards)
            .finish_non_exhaustive()
    }
}
