//! Runtime state of one deck-building session.

use std::fmt;

use crate::core::FlashMessage;
use crate::zones::ZoneManager;

/// Everything the engine mutates.
///
/// Created once per engine and never shared between engines.
#[derive(Clone)]
pub(crate) struct DeckState<T> {
    /// Per-zone card lists. Keys are fixed at construction.
    pub(crate) zones: ZoneManager<T>,

    /// Card picked for preview.
    pub(crate) current: Option<T>,

    /// Normalized results of the last search.
    pub(crate) search_results: Vec<T>,

    /// A search is in flight.
    pub(crate) loading: bool,

    /// Outcome of the last failed operation.
    pub(crate) error: Option<FlashMessage>,
}

impl<T> DeckState<T> {
    pub(crate) fn new(zones: ZoneManager<T>) -> Self {
        Self {
            zones,
            current: None,
            search_results: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for DeckState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckState")
            .field("zones", &self.zones)
            .field("current", &self.current)
            .field("search_results", &self.search_results)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

/// Clears a loading flag when dropped.
///
/// Holding one across an `.await` keeps the flag honest even if the
/// future is dropped before it completes.
pub(crate) struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
