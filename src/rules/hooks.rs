//! Optional per-profile hooks.
//!
//! Games customize the engine by filling in these slots instead of
//! overriding engine code. Every slot is optional; an empty slot means the
//! engine's default behavior.
//!
//! Hooks receive a read-only [`DeckView`] of the current deck so they can
//! count copies, inspect zones, and so on, but they can never mutate it.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::cards::CardId;
use crate::deck::DeckView;
use crate::zones::{ZoneConfig, ZoneId};

use super::validation::Validation;

/// Deck-wide precondition checked before anything else.
pub type PreAddCheck<T> = Arc<dyn Fn(&DeckView<'_, T>, &T) -> Validation + Send + Sync>;

/// Replaces the default zone capacity check.
pub type ZoneCheck<T> = Arc<dyn Fn(&DeckView<'_, T>, &T, &ZoneConfig<T>) -> Validation + Send + Sync>;

/// Copy-count rule, given the zone the card resolved to.
pub type CopyCheck<T> = Arc<dyn Fn(&DeckView<'_, T>, &T, &ZoneId) -> Validation + Send + Sync>;

/// Whole-deck completeness rule.
pub type DeckCheck<T> = Arc<dyn Fn(&DeckView<'_, T>) -> Validation + Send + Sync>;

/// Transforms the stored copy before it is appended.
pub type BeforeAdd<T> = Arc<dyn Fn(&DeckView<'_, T>, T) -> T + Send + Sync>;

/// Observes a card after it was appended.
pub type AfterAdd<T> = Arc<dyn Fn(&DeckView<'_, T>, &T) + Send + Sync>;

/// Replaces filter-based zone resolution. `None` means no zone fits.
pub type ZoneResolver<T> = Arc<dyn Fn(&DeckView<'_, T>, &T) -> Option<ZoneId> + Send + Sync>;

/// Observes a removal before it happens.
pub type BeforeRemove<T> = Arc<dyn Fn(&DeckView<'_, T>, &CardId) + Send + Sync>;

/// Observes the removed card.
pub type AfterRemove<T> = Arc<dyn Fn(&DeckView<'_, T>, &T) + Send + Sync>;

/// Ordering for sorted zone views.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Validation hooks.
pub struct Validators<T> {
    pub before_add: Option<PreAddCheck<T>>,
    pub zone: Option<ZoneCheck<T>>,
    pub copies: Option<CopyCheck<T>>,
    pub complete_deck: Option<DeckCheck<T>>,
}

impl<T> Validators<T> {
    /// No custom validation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            before_add: None,
            zone: None,
            copies: None,
            complete_deck: None,
        }
    }

    #[must_use]
    pub fn with_before_add<F>(mut self, check: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T) -> Validation + Send + Sync + 'static,
    {
        self.before_add = Some(Arc::new(check));
        self
    }

    #[must_use]
    pub fn with_zone<F>(mut self, check: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T, &ZoneConfig<T>) -> Validation + Send + Sync + 'static,
    {
        self.zone = Some(Arc::new(check));
        self
    }

    #[must_use]
    pub fn with_copies<F>(mut self, check: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T, &ZoneId) -> Validation + Send + Sync + 'static,
    {
        self.copies = Some(Arc::new(check));
        self
    }

    #[must_use]
    pub fn with_complete_deck<F>(mut self, check: F) -> Self
    where
        F: Fn(&DeckView<'_, T>) -> Validation + Send + Sync + 'static,
    {
        self.complete_deck = Some(Arc::new(check));
        self
    }
}

impl<T> Default for Validators<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Validators<T> {
    fn clone(&self) -> Self {
        Self {
            before_add: self.before_add.clone(),
            zone: self.zone.clone(),
            copies: self.copies.clone(),
            complete_deck: self.complete_deck.clone(),
        }
    }
}

impl<T> fmt::Debug for Validators<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validators")
            .field("before_add", &self.before_add.is_some())
            .field("zone", &self.zone.is_some())
            .field("copies", &self.copies.is_some())
            .field("complete_deck", &self.complete_deck.is_some())
            .finish()
    }
}

/// Processing hooks around mutations, zone resolution and sorting.
pub struct Processors<T> {
    pub before_add: Option<BeforeAdd<T>>,
    pub after_add: Option<AfterAdd<T>>,
    pub determine_zone: Option<ZoneResolver<T>>,
    pub before_remove: Option<BeforeRemove<T>>,
    pub after_remove: Option<AfterRemove<T>>,
    pub sort: Option<Comparator<T>>,
}

impl<T> Processors<T> {
    /// No custom processing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            before_add: None,
            after_add: None,
            determine_zone: None,
            before_remove: None,
            after_remove: None,
            sort: None,
        }
    }

    #[must_use]
    pub fn with_before_add<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, T) -> T + Send + Sync + 'static,
    {
        self.before_add = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_after_add<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T) + Send + Sync + 'static,
    {
        self.after_add = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_determine_zone<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T) -> Option<ZoneId> + Send + Sync + 'static,
    {
        self.determine_zone = Some(Arc::new(resolver));
        self
    }

    #[must_use]
    pub fn with_before_remove<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &CardId) + Send + Sync + 'static,
    {
        self.before_remove = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_after_remove<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DeckView<'_, T>, &T) + Send + Sync + 'static,
    {
        self.after_remove = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_sort<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(compare));
        self
    }
}

impl<T> Default for Processors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Processors<T> {
    fn clone(&self) -> Self {
        Self {
            before_add: self.before_add.clone(),
            after_add: self.after_add.clone(),
            determine_zone: self.determine_zone.clone(),
            before_remove: self.before_remove.clone(),
            after_remove: self.after_remove.clone(),
            sort: self.sort.clone(),
        }
    }
}

impl<T> fmt::Debug for Processors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processors")
            .field("before_add", &self.before_add.is_some())
            .field("after_add", &self.after_add.is_some())
            .field("determine_zone", &self.determine_zone.is_some())
            .field("before_remove", &self.before_remove.is_some())
            .field("after_remove", &self.after_remove.is_some())
            .field("sort", &self.sort.is_some())
            .finish()
    }
}
