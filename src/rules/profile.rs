//! Deck rules and game profiles.
//!
//! A `Profile` is everything the engine needs to know about one game:
//! its zones and copy limit (`DeckRules`) plus optional validators and
//! processors. Profiles are plain data - the engine has no game-specific
//! code paths.

use rustc_hash::FxHashSet;

use crate::zones::{ZoneConfig, ZoneId};

use super::hooks::{Processors, Validators};

/// Problems with a profile, caught when an engine is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("deck profile `{0}` declares no zones")]
    NoZones(String),

    #[error("zone `{0}` is declared more than once")]
    DuplicateZone(ZoneId),

    #[error("default zone `{0}` is not a declared zone")]
    UnknownDefaultZone(ZoneId),
}

/// Zone layout and copy limit for a deck.
#[derive(Clone, Debug)]
pub struct DeckRules<T> {
    /// Copies of one card allowed deck-wide. `None` for unlimited.
    ///
    /// Informational for the engine; copy validators enforce it.
    pub max_copies_per_card: Option<usize>,

    /// Zone used when no filter matches.
    pub default_zone: ZoneId,

    /// Zones, most specific first.
    pub zones: Vec<ZoneConfig<T>>,
}

impl<T> DeckRules<T> {
    /// Create rules with no zones yet.
    pub fn new(default_zone: impl Into<ZoneId>) -> Self {
        Self {
            max_copies_per_card: None,
            default_zone: default_zone.into(),
            zones: Vec::new(),
        }
    }

    /// Set the copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: usize) -> Self {
        self.max_copies_per_card = Some(max);
        self
    }

    /// Append a zone. Declaration order is resolution order.
    #[must_use]
    pub fn with_zone(mut self, zone: ZoneConfig<T>) -> Self {
        self.zones.push(zone);
        self
    }

    /// Get a zone config by ID.
    #[must_use]
    pub fn zone(&self, id: &ZoneId) -> Option<&ZoneConfig<T>> {
        self.zones.iter().find(|z| &z.id == id)
    }

    /// Zone ids in declaration order.
    pub fn zone_ids(&self) -> impl Iterator<Item = &ZoneId> + '_ {
        self.zones.iter().map(|z| &z.id)
    }
}

/// Complete configuration for one game.
///
/// ## Example
///
/// ```
/// use ccg_deck::cards::Card;
/// use ccg_deck::rules::{DeckRules, Profile, Rejection, Validators};
/// use ccg_deck::zones::ZoneConfig;
///
/// let rules = DeckRules::new("main")
///     .with_max_copies(2)
///     .with_zone(ZoneConfig::new("main", "Main Deck").with_max_cards(30));
///
/// let profile: Profile<Card> = Profile::new("duel", rules).with_validators(
///     Validators::new().with_copies(|deck, card: &Card, _zone| {
///         if deck.copy_count(&card.id) >= 2 {
///             return Err(Rejection::rule(format!("Only 2 copies of {}", card.name)));
///         }
///         Ok(())
///     }),
/// );
///
/// assert!(profile.check().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Profile<T> {
    /// Game name ("yugioh", "pokemon", ...).
    pub name: String,

    pub rules: DeckRules<T>,

    pub validators: Validators<T>,

    pub processors: Processors<T>,
}

impl<T> Profile<T> {
    /// Create a profile with no hooks.
    pub fn new(name: impl Into<String>, rules: DeckRules<T>) -> Self {
        Self {
            name: name.into(),
            rules,
            validators: Validators::new(),
            processors: Processors::new(),
        }
    }

    #[must_use]
    pub fn with_validators(mut self, validators: Validators<T>) -> Self {
        self.validators = validators;
        self
    }

    #[must_use]
    pub fn with_processors(mut self, processors: Processors<T>) -> Self {
        self.processors = processors;
        self
    }

    /// Verify the zone layout is usable.
    ///
    /// Zone ids must be unique, there must be at least one zone, and the
    /// default zone must be one of them.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.rules.zones.is_empty() {
            return Err(ConfigError::NoZones(self.name.clone()));
        }

        let mut seen = FxHashSet::default();
        for id in self.rules.zone_ids() {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateZone(id.clone()));
            }
        }

        if self.rules.zone(&self.rules.default_zone).is_none() {
            return Err(ConfigError::UnknownDefaultZone(
                self.rules.default_zone.clone(),
            ));
        }

        Ok(())
    }
}
