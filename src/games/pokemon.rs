//! Pokémon TCG profile.
//!
//! Single 60-card zone, at most 4 copies of a card (Basic Energy is
//! exempt), and a finished deck needs at least one Basic Pokémon.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::catalog::{CatalogError, CatalogRecord, MemoryCatalog};
use crate::core::KeyMinter;
use crate::deck::DeckView;
use crate::rules::{DeckRules, Processors, Profile, Rejection, Validation, Validators};
use crate::zones::{ZoneConfig, ZoneId};

use super::stamp_instance;

pub const MAIN: ZoneId = ZoneId::from_static("main");

/// Exact deck size.
pub const DECK_SIZE: usize = 60;

/// Copies of one card (Basic Energy excepted).
pub const MAX_COPIES: usize = 4;

pub const SUPERTYPE_POKEMON: &str = "Pokémon";
pub const SUPERTYPE_ENERGY: &str = "Energy";
pub const SUPERTYPE_TRAINER: &str = "Trainer";
pub const SUBTYPE_BASIC: &str = "Basic";

const DECK_SIZE_MESSAGE: &str = "A Pokémon deck must contain exactly 60 cards";

/// Card record as served by the Pokémon TCG API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonRaw {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub supertype: String,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<PokemonImages>,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

impl CatalogRecord for PokemonRaw {
    fn record_name(&self) -> &str {
        &self.name
    }
}

/// Normalize an API record. Supertype becomes the card kind (records
/// without one get none), subtypes become tags, rule texts are joined
/// into the description.
pub fn map_card(raw: PokemonRaw) -> Card {
    let mut card = Card::new(CardId::Text(raw.id), raw.name);
    card.kind = Some(raw.supertype).filter(|supertype| !supertype.is_empty());
    card.tags.extend(raw.subtypes.unwrap_or_default());
    card.image = raw.images.and_then(|images| images.small);
    card.description = raw
        .rules
        .map(|rules| rules.join(" "))
        .filter(|text| !text.is_empty());
    card
}

#[must_use]
pub fn is_basic_energy(card: &Card) -> bool {
    card.is_kind(SUPERTYPE_ENERGY) && card.has_tag(SUBTYPE_BASIC)
}

#[must_use]
pub fn is_trainer(card: &Card) -> bool {
    card.is_kind(SUPERTYPE_TRAINER)
}

#[must_use]
pub fn is_basic_pokemon(card: &Card) -> bool {
    card.is_kind(SUPERTYPE_POKEMON) && card.has_tag(SUBTYPE_BASIC)
}

fn check_deck_size(deck: &DeckView<'_, Card>, _card: &Card) -> Validation {
    if deck.total_cards() >= DECK_SIZE {
        return Err(Rejection::capacity(DECK_SIZE_MESSAGE));
    }
    Ok(())
}

fn check_copies(deck: &DeckView<'_, Card>, card: &Card, _zone: &ZoneId) -> Validation {
    if is_basic_energy(card) {
        return Ok(());
    }
    if deck.copy_count(&card.id) >= MAX_COPIES {
        return Err(Rejection::rule(format!(
            "You cannot have more than {MAX_COPIES} copies of {}",
            card.name
        )));
    }
    Ok(())
}

fn check_complete(deck: &DeckView<'_, Card>) -> Validation {
    if deck.total_cards() != DECK_SIZE {
        return Err(Rejection::capacity(DECK_SIZE_MESSAGE));
    }
    if !deck.iter_zone(&MAIN).any(is_basic_pokemon) {
        return Err(Rejection::rule(
            "Your deck must contain at least one Basic Pokémon",
        ));
    }
    Ok(())
}

/// Build the profile with entropy-seeded instance keys.
#[must_use]
pub fn profile() -> Profile<Card> {
    profile_with_keys(Arc::new(KeyMinter::from_entropy()))
}

/// Build the profile minting instance keys from `keys`.
#[must_use]
pub fn profile_with_keys(keys: Arc<KeyMinter>) -> Profile<Card> {
    let rules = DeckRules::new(MAIN)
        .with_max_copies(MAX_COPIES)
        .with_zone(ZoneConfig::new(MAIN, "Main Deck").with_max_cards(DECK_SIZE));

    Profile::new("pokemon", rules)
        .with_validators(
            Validators::new()
                .with_before_add(check_deck_size)
                .with_copies(check_copies)
                .with_complete_deck(check_complete),
        )
        .with_processors(Processors::new().with_before_add(stamp_instance(keys)))
}

/// In-memory catalog over a JSON array of API records.
pub fn catalog_from_json(json: &str) -> Result<MemoryCatalog<PokemonRaw, Card>, CatalogError> {
    MemoryCatalog::from_json(json, map_card)
}
