//! Card records - the items a deck is built from.
//!
//! A `Card` is what a catalog normalizer produces: an identifier, a display
//! name, an optional image, and whatever game-specific data the profile
//! needs, stored as generic attributes.
//!
//! The deck engine is not tied to `Card`. It works over any type that
//! implements [`DeckItem`].

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Catalog identifier for a card.
///
/// Some catalogs key cards by number, others by string (set code plus
/// collector number). Both compare by value; a numeric id never equals a
/// textual one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    /// Numeric catalog id.
    Num(u64),
    /// Textual catalog id.
    Text(String),
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        CardId::Num(id)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        CardId::Num(u64::from(id))
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        CardId::Text(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        CardId::Text(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Num(n) => write!(f, "{n}"),
            CardId::Text(s) => f.write_str(s),
        }
    }
}

/// Anything the deck engine can store in a zone.
///
/// Items are value data: the engine clones an item when it is inserted and
/// never mutates a stored copy in place.
pub trait DeckItem: Clone {
    /// Stable catalog identifier. Copies of the same card share it.
    fn card_id(&self) -> &CardId;

    /// Display name, used for default ordering and messages.
    fn name(&self) -> &str;

    /// Optional image reference.
    fn image(&self) -> Option<&str> {
        None
    }
}

/// Tag lists are short (a handful of subtypes at most).
pub type Tags = SmallVec<[String; 4]>;

/// Normalized catalog card.
///
/// ## Example
///
/// ```
/// use ccg_deck::cards::{Card, CardId, DeckItem};
///
/// let card = Card::new(89631139u64, "Blue-Eyes White Dragon")
///     .with_kind("normal")
///     .with_attr("atk", 3000i32);
///
/// assert_eq!(card.card_id(), &CardId::Num(89631139));
/// assert_eq!(card.get_int("atk"), Some(3000));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Catalog identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Image reference (small artwork URL).
    pub image: Option<String>,

    /// Rules text.
    pub description: Option<String>,

    /// Primary type as the catalog names it ("Pokémon", "effect", "spell").
    pub kind: Option<String>,

    /// Subtypes or type-line entries ("Basic", "Stage 1", "Dragon").
    pub tags: Tags,

    /// Game-specific attributes.
    pub attributes: Attributes,

    /// Per-copy key stamped when the card is placed in a deck.
    ///
    /// Two copies of the same card share `id` but never `instance`.
    pub instance: Option<u64>,
}

impl Card {
    /// Create a card with just an id and a name.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            description: None,
            kind: None,
            tags: Tags::new(),
            attributes: Attributes::default(),
            instance: None,
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the primary type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Append a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_attr(key).and_then(AttributeValue::as_int)
    }

    /// Get a boolean attribute with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_attr(key)
            .and_then(AttributeValue::as_bool)
            .unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(AttributeValue::as_text)
    }

    /// Check the primary type, ignoring case.
    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case(kind))
    }

    /// Check for a tag, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl DeckItem for Card {
    fn card_id(&self) -> &CardId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_kinds() {
        assert_eq!(CardId::from(42u64), CardId::Num(42));
        assert_eq!(CardId::from("base1-4"), CardId::Text("base1-4".to_string()));
        assert_ne!(CardId::from(4u64), CardId::from("4"));
        assert_eq!(format!("{}", CardId::from(42u64)), "42");
        assert_eq!(format!("{}", CardId::from("base1-4")), "base1-4");
    }

    #[test]
    fn test_card_id_serde_untagged() {
        let num: CardId = serde_json::from_str("46986414").unwrap();
        let text: CardId = serde_json::from_str("\"xy1-1\"").unwrap();
        assert_eq!(num, CardId::Num(46986414));
        assert_eq!(text, CardId::Text("xy1-1".to_string()));
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("base1-4", "Charizard")
            .with_image("https://images.example/base1-4.png")
            .with_kind("Pokémon")
            .with_tag("Stage 2")
            .with_attr("hp", 120i32);

        assert_eq!(card.name(), "Charizard");
        assert_eq!(card.image(), Some("https://images.example/base1-4.png"));
        assert!(card.is_kind("pokémon"));
        assert!(card.has_tag("stage 2"));
        assert!(!card.has_tag("Basic"));
        assert_eq!(card.get_int("hp"), Some(120));
        assert_eq!(card.get_int("missing"), None);
        assert!(!card.get_bool("missing", false));
        assert_eq!(card.instance, None);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(1u64, "Test").with_attr("level", 4i32);

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
    }
}
