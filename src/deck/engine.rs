//! The deck engine.
//!
//! `DeckEngine` owns one deck's state and runs every mutation through the
//! profile's rules:
//!
//! 1. Pre-add validator (deck-wide precondition)
//! 2. Zone resolution (custom resolver, else first matching filter, else
//!    the default zone)
//! 3. Zone capacity (custom zone validator, else `max_cards`)
//! 4. Copy-count validator, given the resolved zone
//!
//! The first failing step stops the pipeline. Validation always finishes
//! before anything is mutated, so a rejected add leaves the deck as it was.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use crate::cards::{CardId, DeckItem};
use crate::catalog::{Catalog, CatalogPage, FETCH_FAILED};
use crate::core::FlashMessage;
use crate::rules::{ConfigError, DeckRules, ErrorCategory, Profile, Rejection, Validation};
use crate::zones::{ZoneId, ZoneManager};

use super::state::{DeckState, LoadingGuard};
use super::view::{compare_names, DeckView};

/// Replaces the catalog's own normalizer.
pub type ItemAdapter<R, T> = Arc<dyn Fn(R) -> T + Send + Sync>;

/// One deck-building session for one game.
///
/// ## Usage
///
/// ```
/// use ccg_deck::cards::CardId;
/// use ccg_deck::catalog::MemoryCatalog;
/// use ccg_deck::deck::DeckEngine;
/// use ccg_deck::games::generic;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let catalog = MemoryCatalog::from_json(
///     r#"[{"id": 1, "name": "Forest"}, {"id": 2, "name": "Island"}]"#,
///     generic::map_card,
/// )
/// .unwrap();
/// let mut deck = DeckEngine::new(generic::profile(), catalog).unwrap();
///
/// deck.search("for").await;
/// let forest = deck.search_results()[0].clone();
///
/// assert!(deck.add_card(&forest));
/// assert!(deck.add_card(&forest));
/// assert_eq!(deck.copy_count(&CardId::Num(1)), 2);
/// # });
/// ```
pub struct DeckEngine<T, C: Catalog<Item = T>> {
    profile: Profile<T>,
    catalog: C,
    adapter: Option<ItemAdapter<C::Raw, T>>,
    state: DeckState<T>,
}

impl<T, C> DeckEngine<T, C>
where
    T: DeckItem,
    C: Catalog<Item = T>,
{
    /// Create an engine with one empty list per declared zone.
    ///
    /// Fails if the profile's zone layout is unusable.
    pub fn new(profile: Profile<T>, catalog: C) -> Result<Self, ConfigError> {
        profile.check()?;

        let zones = ZoneManager::new(profile.rules.zone_ids().cloned());
        debug!(
            profile = %profile.name,
            zones = zones.zone_ids().len(),
            "deck engine created"
        );

        Ok(Self {
            profile,
            catalog,
            adapter: None,
            state: DeckState::new(zones),
        })
    }

    /// Normalize search results with `adapter` instead of the catalog's
    /// own `map_item`.
    #[must_use]
    pub fn with_adapter<F>(mut self, adapter: F) -> Self
    where
        F: Fn(C::Raw) -> T + Send + Sync + 'static,
    {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    // === Configuration ===

    /// Profile name ("yugioh", "pokemon", ...).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules<T> {
        &self.profile.rules
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Read-only view, the same one hooks receive.
    #[must_use]
    pub fn view(&self) -> DeckView<'_, T> {
        DeckView::new(&self.state.zones, &self.profile.rules)
    }

    // === Zone assignment and validation ===

    /// Decide which zone a card belongs in.
    ///
    /// A custom resolver, if configured, has the final say. Otherwise the
    /// first zone (in declaration order) whose filter accepts the card
    /// wins, falling back to the default zone.
    #[must_use]
    pub fn determine_zone(&self, card: &T) -> Option<ZoneId> {
        if let Some(resolve) = &self.profile.processors.determine_zone {
            return resolve(&self.view(), card);
        }

        let rules = &self.profile.rules;
        let zone = rules
            .zones
            .iter()
            .find(|zone| zone.accepts(card))
            .map_or_else(|| rules.default_zone.clone(), |zone| zone.id.clone());
        Some(zone)
    }

    /// Run the add pipeline without mutating anything.
    ///
    /// Returns the zone the card would go to.
    pub fn can_add(&self, card: &T) -> Result<ZoneId, Rejection> {
        let view = self.view();
        let validators = &self.profile.validators;

        if let Some(check) = &validators.before_add {
            check(&view, card)?;
        }

        let zone_id = self.determine_zone(card).ok_or(Rejection::NoZone)?;
        let zone = self
            .profile
            .rules
            .zone(&zone_id)
            .ok_or_else(|| Rejection::UnknownZone(zone_id.clone()))?;

        match &validators.zone {
            Some(check) => check(&view, card, zone)?,
            None => {
                if zone.is_full(view.zone_size(&zone_id)) {
                    return Err(Rejection::ZoneFull {
                        zone: zone.name.clone(),
                        max: zone.max_cards.unwrap_or_default(),
                    });
                }
            }
        }

        if let Some(check) = &validators.copies {
            check(&view, card, &zone_id)?;
        }

        Ok(zone_id)
    }

    /// Run the whole-deck validator. Valid when none is configured.
    pub fn validate_deck(&self) -> Validation {
        match &self.profile.validators.complete_deck {
            Some(check) => check(&self.view()),
            None => Ok(()),
        }
    }

    // === Mutations ===

    /// Add a copy of `card` to the zone it resolves to.
    ///
    /// On rejection the reason lands in [`error`](Self::error) and the
    /// deck is untouched.
    pub fn add_card(&mut self, card: &T) -> bool {
        self.state.error = None;

        let zone = match self.can_add(card) {
            Ok(zone) => zone,
            Err(rejection) => {
                self.reject(card, &rejection);
                return false;
            }
        };

        let stored = match &self.profile.processors.before_add {
            Some(process) => process(&self.view(), card.clone()),
            None => card.clone(),
        };

        self.state.zones.push(&zone, stored.clone());
        debug!(
            card = %stored.card_id(),
            name = stored.name(),
            zone = %zone,
            "card added"
        );

        if let Some(after) = &self.profile.processors.after_add {
            after(&self.view(), &stored);
        }

        true
    }

    /// Remove the first copy of a card, scanning zones in declaration
    /// order.
    ///
    /// Returns `false` without touching anything (not even the error
    /// slot) if the card is not in the deck.
    pub fn remove_card(&mut self, id: &CardId) -> bool {
        if !self.state.zones.contains(id) {
            return false;
        }

        if let Some(before) = &self.profile.processors.before_remove {
            before(&self.view(), id);
        }

        let Some((zone, removed)) = self.state.zones.remove_first(id) else {
            return false;
        };
        debug!(card = %id, zone = %zone, "card removed");

        if let Some(after) = &self.profile.processors.after_remove {
            after(&self.view(), &removed);
        }

        true
    }

    /// Set (or clear) the card shown in the detail view.
    pub fn select_card(&mut self, card: Option<T>) {
        self.state.current = card;
    }

    /// Query the catalog and replace the search results.
    ///
    /// `loading` is set for the duration of the call and cleared on every
    /// path, including when the returned future is dropped early.
    ///
    /// Overlapping searches are not serialized here: `&mut self` already
    /// prevents two on the same engine, and callers that queue searches
    /// own debouncing.
    pub async fn search(&mut self, query: &str) {
        self.state.error = None;
        let _loading = LoadingGuard::start(&mut self.state.loading);
        debug!(profile = %self.profile.name, query, "searching catalog");

        match self.catalog.search(query).await {
            Ok(CatalogPage {
                error: Some(message),
                ..
            }) => {
                warn!(profile = %self.profile.name, query, error = %message, "catalog returned an error");
                self.state.error = Some(FlashMessage::error(message));
                self.state.search_results.clear();
            }
            Ok(CatalogPage { data, error: None }) => {
                let results: Vec<T> = data
                    .into_iter()
                    .map(|raw| match &self.adapter {
                        Some(adapt) => adapt(raw),
                        None => self.catalog.map_item(raw),
                    })
                    .collect();
                info!(profile = %self.profile.name, query, results = results.len(), "search complete");
                self.state.search_results = results;
            }
            Err(err) => {
                warn!(
                    profile = %self.profile.name,
                    query,
                    category = ?err.category(),
                    error = %err,
                    "catalog lookup failed"
                );
                self.state.error = Some(FlashMessage::error(FETCH_FAILED));
                self.state.search_results.clear();
            }
        }
    }

    /// Clear the error slot.
    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    // === Queries ===

    /// Zone ids in declaration order.
    #[must_use]
    pub fn zone_ids(&self) -> &[ZoneId] {
        self.state.zones.zone_ids()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: &ZoneId) -> usize {
        self.state.zones.zone_size(zone)
    }

    /// Card count per zone, in declaration order.
    #[must_use]
    pub fn zone_counts(&self) -> Vec<(ZoneId, usize)> {
        self.view().zone_counts()
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.state.zones.total_cards()
    }

    /// Is at least one copy of the card in the deck?
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.state.zones.contains(id)
    }

    /// Copies of a card across all zones.
    #[must_use]
    pub fn copy_count(&self, id: &CardId) -> usize {
        self.state.zones.copy_count(id)
    }

    /// Snapshot of a zone in insertion order.
    #[must_use]
    pub fn zone(&self, zone: &ZoneId) -> Option<Vector<T>> {
        self.state.zones.cards(zone)
    }

    /// A zone's cards in display order.
    ///
    /// Uses the profile's comparator when there is one (ties broken by
    /// name), otherwise name order. The stored list is not reordered.
    /// Unknown zones yield an empty list.
    #[must_use]
    pub fn sorted_zone(&self, zone: &ZoneId) -> Vec<T> {
        let mut cards: Vec<T> = self.state.zones.iter_zone(zone).cloned().collect();
        match &self.profile.processors.sort {
            Some(compare) => cards.sort_by(|a, b| {
                compare(a, b).then_with(|| compare_names(a.name(), b.name()))
            }),
            None => cards.sort_by(|a, b| compare_names(a.name(), b.name())),
        }
        cards
    }

    /// Card picked for preview.
    #[must_use]
    pub fn current_card(&self) -> Option<&T> {
        self.state.current.as_ref()
    }

    /// Normalized results of the last search.
    #[must_use]
    pub fn search_results(&self) -> &[T] {
        &self.state.search_results
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Outcome of the last failed operation, if any.
    #[must_use]
    pub fn error(&self) -> Option<&FlashMessage> {
        self.state.error.as_ref()
    }

    fn reject(&mut self, card: &T, rejection: &Rejection) {
        match rejection.category() {
            ErrorCategory::Structural => warn!(
                profile = %self.profile.name,
                card = %card.card_id(),
                error = %rejection,
                "deck profile could not place card"
            ),
            category => debug!(
                card = %card.card_id(),
                ?category,
                error = %rejection,
                "card rejected"
            ),
        }
        self.state.error = Some(FlashMessage::error(rejection.to_string()));
    }
}
