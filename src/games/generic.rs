//! Base profile: one unbounded zone, no extra rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::catalog::{CatalogError, CatalogRecord, MemoryCatalog};
use crate::rules::{DeckRules, Profile};
use crate::zones::{ZoneConfig, ZoneId};

/// The only zone.
pub const MAIN: ZoneId = ZoneId::from_static("main");

/// Minimal catalog record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericRaw {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatalogRecord for GenericRaw {
    fn record_name(&self) -> &str {
        &self.name
    }
}

/// Normalize a raw record.
pub fn map_card(raw: GenericRaw) -> Card {
    let mut card = Card::new(CardId::Num(raw.id), raw.name);
    card.image = raw.image;
    card
}

/// Build the base profile.
#[must_use]
pub fn profile() -> Profile<Card> {
    let rules = DeckRules::new(MAIN).with_zone(ZoneConfig::new(MAIN, "Main Deck"));
    Profile::new("generic", rules)
}

/// In-memory catalog over a JSON array of [`GenericRaw`] records.
pub fn catalog_from_json(json: &str) -> Result<MemoryCatalog<GenericRaw, Card>, CatalogError> {
    MemoryCatalog::from_json(json, map_card)
}
