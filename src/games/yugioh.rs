//! Yu-Gi-Oh! profile.
//!
//! Two zones: a 40 to 60 card main deck and a 15 card extra deck. Extra
//! deck monsters (fusion, synchro, xyz, link) are routed by frame type.
//! Copy limits are 3, tightened by the TCG banlist (OCG as fallback).
//!
//! ## Zone Resolution
//!
//! `main` is declared first but its filter rejects extra deck frames, so
//! an xyz monster falls through to `extra`.

use std::cmp::Ordering;
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
pub const EXTRA: ZoneId = ZoneId::from_static("extra");

pub const MAIN_MIN: usize = 40;
pub const MAIN_MAX: usize = 60;
pub const EXTRA_MAX: usize = 15;
pub const MAX_COPIES: usize = 3;

/// Frame types that live in the extra deck.
pub const EXTRA_FRAMES: [&str; 7] = [
    "fusion",
    "fusion_pendulum",
    "synchro",
    "synchro_pendulum",
    "xyz",
    "xyz_pendulum",
    "link",
];

const MAIN_ORDER: [&str; 5] = ["normal", "effect", "effect_pendulum", "spell", "trap"];
const EXTRA_ORDER: [&str; 4] = ["fusion", "synchro", "xyz", "link"];
const UNRANKED: usize = 999;

// Attribute keys set by `map_card`.
pub const ATTR_TYPE: &str = "type";
pub const ATTR_READABLE_TYPE: &str = "readable_type";
pub const ATTR_ATTRIBUTE: &str = "attribute";
pub const ATTR_RACE: &str = "race";
pub const ATTR_LEVEL: &str = "level";
pub const ATTR_RANK: &str = "rank";
pub const ATTR_ATK: &str = "atk";
pub const ATTR_DEF: &str = "def";
pub const ATTR_SCALE: &str = "scale";
pub const ATTR_LINK_VALUE: &str = "link_value";
pub const ATTR_LINK_MARKERS: &str = "link_markers";
pub const ATTR_PENDULUM_TEXT: &str = "pendulum_description";
pub const ATTR_HAS_STATS: &str = "has_stats";
pub const ATTR_BAN_TCG: &str = "ban_tcg";
pub const ATTR_BAN_OCG: &str = "ban_ocg";

/// Card record as served by the YGOPRODeck card database.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YugiohRaw {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(rename = "frameType", default)]
    pub frame_type: String,
    #[serde(rename = "humanReadableCardType", default)]
    pub readable_type: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub monster_desc: Option<String>,
    #[serde(default)]
    pub pend_desc: Option<String>,
    #[serde(default)]
    pub atk: Option<i64>,
    #[serde(default)]
    pub def: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub scale: Option<i64>,
    #[serde(default)]
    pub linkval: Option<i64>,
    #[serde(default)]
    pub linkmarkers: Option<Vec<String>>,
    #[serde(default)]
    pub typeline: Option<Vec<String>>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub card_images: Vec<YugiohImage>,
    #[serde(default)]
    pub banlist_info: Option<BanlistInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YugiohImage {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_url_small: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanlistInfo {
    #[serde(default)]
    pub ban_tcg: Option<String>,
    #[serde(default)]
    pub ban_ocg: Option<String>,
}

impl CatalogRecord for YugiohRaw {
    fn record_name(&self) -> &str {
        &self.name
    }
}

/// Normalize a card database record.
///
/// Frame type becomes the card kind and the typeline becomes tags. Xyz
/// monsters report their rank in `level`; it is stored under `rank`.
pub fn map_card(raw: YugiohRaw) -> Card {
    let frame = raw.frame_type.to_lowercase();
    let is_xyz = frame == "xyz" || frame == "xyz_pendulum";

    let mut card = Card::new(CardId::Num(raw.id), raw.name);
    card.image = raw
        .card_images
        .into_iter()
        .next()
        .and_then(|image| image.image_url_small);
    card.description = match (raw.scale, raw.monster_desc) {
        (Some(_), Some(monster_text)) => Some(monster_text),
        _ => raw.desc,
    };
    card.tags.extend(raw.typeline.unwrap_or_default());

    card.set_attr(ATTR_HAS_STATS, frame != "spell" && frame != "trap");
    if let Some(level) = raw.level {
        card.set_attr(if is_xyz { ATTR_RANK } else { ATTR_LEVEL }, level);
    }

    let numbers = [
        (ATTR_ATK, raw.atk),
        (ATTR_DEF, raw.def),
        (ATTR_SCALE, raw.scale),
        (ATTR_LINK_VALUE, raw.linkval),
    ];
    for (key, value) in numbers {
        if let Some(value) = value {
            card.set_attr(key, value);
        }
    }

    let texts = [
        (ATTR_TYPE, raw.card_type),
        (ATTR_READABLE_TYPE, raw.readable_type),
        (ATTR_ATTRIBUTE, raw.attribute),
        (ATTR_RACE, raw.race),
        (ATTR_PENDULUM_TEXT, raw.pend_desc),
    ];
    for (key, value) in texts {
        if let Some(value) = value {
            card.set_attr(key, value);
        }
    }

    if let Some(markers) = raw.linkmarkers {
        card.set_attr(ATTR_LINK_MARKERS, markers);
    }

    let banlist = raw.banlist_info.unwrap_or_default();
    for (key, value) in [(ATTR_BAN_TCG, banlist.ban_tcg), (ATTR_BAN_OCG, banlist.ban_ocg)] {
        if let Some(status) = value.filter(|s| !s.is_empty()) {
            card.set_attr(key, status);
        }
    }

    card.kind = Some(frame).filter(|frame| !frame.is_empty());
    card
}

/// Banlist tier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Legality {
    Banned,
    Limited,
    SemiLimited,
    Unlimited,
}

impl Legality {
    /// Parse a banlist status. Anything unrecognized is unlimited.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "banned" | "forbidden" => Self::Banned,
            "limited" => Self::Limited,
            "semi-limited" => Self::SemiLimited,
            _ => Self::Unlimited,
        }
    }

    /// TCG status, falling back to OCG.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        card.get_text(ATTR_BAN_TCG)
            .or_else(|| card.get_text(ATTR_BAN_OCG))
            .map_or(Self::Unlimited, Self::parse)
    }

    /// Copies allowed by this tier alone.
    #[must_use]
    pub fn max_copies(self) -> Option<usize> {
        match self {
            Self::Banned => Some(0),
            Self::Limited => Some(1),
            Self::SemiLimited => Some(2),
            Self::Unlimited => None,
        }
    }

    fn rejection(self, name: &str) -> Rejection {
        Rejection::rule(match self {
            Self::Banned => format!("{name} is banned and cannot be used"),
            Self::Limited => format!("{name} is limited to 1 copy"),
            Self::SemiLimited => format!("{name} is semi-limited to 2 copies"),
            Self::Unlimited => format!("You cannot have more than {MAX_COPIES} copies of {name}"),
        })
    }
}

/// Does this card go in the extra deck?
#[must_use]
pub fn is_extra_deck(card: &Card) -> bool {
    card.kind
        .as_deref()
        .is_some_and(|frame| EXTRA_FRAMES.iter().any(|f| f.eq_ignore_ascii_case(frame)))
}

fn frame_rank(card: &Card) -> usize {
    let order: &[&str] = if is_extra_deck(card) {
        &EXTRA_ORDER
    } else {
        &MAIN_ORDER
    };
    card.kind
        .as_deref()
        .and_then(|frame| order.iter().position(|f| f.eq_ignore_ascii_case(frame)))
        .unwrap_or(UNRANKED)
}

/// Deck order: monsters by frame, then spells, then traps. Extra deck
/// goes fusion, synchro, xyz, link. The engine breaks ties by name.
pub fn compare_frames(a: &Card, b: &Card) -> Ordering {
    frame_rank(a).cmp(&frame_rank(b))
}

fn check_copies(deck: &DeckView<'_, Card>, card: &Card, _zone: &ZoneId) -> Validation {
    let count = deck.copy_count(&card.id);

    let legality = Legality::of(card);
    if legality.max_copies().is_some_and(|limit| count >= limit) {
        return Err(legality.rejection(&card.name));
    }
    if count >= MAX_COPIES {
        return Err(Legality::Unlimited.rejection(&card.name));
    }
    Ok(())
}

fn check_complete(deck: &DeckView<'_, Card>) -> Validation {
    let main = deck.zone_size(&MAIN);
    if main < MAIN_MIN {
        return Err(Rejection::capacity(format!(
            "Main Deck must contain at least {MAIN_MIN} cards"
        )));
    }
    if main > MAIN_MAX {
        return Err(Rejection::capacity(format!(
            "Main Deck cannot exceed {MAIN_MAX} cards"
        )));
    }
    if deck.zone_size(&EXTRA) > EXTRA_MAX {
        return Err(Rejection::capacity(format!(
            "Extra Deck cannot exceed {EXTRA_MAX} cards"
        )));
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
        .with_zone(
            ZoneConfig::new(MAIN, "Main Deck")
                .with_max_cards(MAIN_MAX)
                .with_filter(|card: &Card| !is_extra_deck(card)),
        )
        .with_zone(
            ZoneConfig::new(EXTRA, "Extra Deck")
                .with_max_cards(EXTRA_MAX)
                .with_filter(is_extra_deck),
        );

    Profile::new("yugioh", rules)
        .with_validators(
            Validators::new()
                .with_copies(check_copies)
                .with_complete_deck(check_complete),
        )
        .with_processors(
            Processors::new()
                .with_before_add(stamp_instance(keys))
                .with_sort(compare_frames),
        )
}

/// In-memory catalog over a JSON array of card database records.
pub fn catalog_from_json(json: &str) -> Result<MemoryCatalog<YugiohRaw, Card>, CatalogError> {
    MemoryCatalog::from_json(json, map_card)
}
