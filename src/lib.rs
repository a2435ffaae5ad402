//! # ccg-deck
//!
//! A data-driven deck-building engine for collectible card games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded zones, copy limits or card types.
//!    Games describe themselves with a `Profile` at startup.
//!
//! 2. **Validate, Then Mutate**: Every add runs the full validation
//!    pipeline before touching the deck. A rejected operation changes
//!    nothing except the error slot.
//!
//! 3. **Configuration Over Convention**: Zones, validators and processors
//!    are plain data (`ZoneConfig`, `DeckRules`, `Validators`,
//!    `Processors`), not subclasses.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Zone lists are `im` vectors, so
//!   read-only snapshots handed to callers are O(1).
//!
//! - **Pluggable Catalogs**: Card lookup is an async `Catalog` trait;
//!   the engine only sees normalized items.
//!
//! ## Modules
//!
//! - `cards`: Card ids, the `DeckItem` trait, the shipped `Card` record
//! - `zones`: Zone system (profile-configured, not hardcoded)
//! - `rules`: Deck rules, profiles, hooks, rejections
//! - `core`: Flash messages and instance-key minting
//! - `deck`: The `DeckEngine` itself
//! - `catalog`: Catalog trait and an in-memory catalog
//! - `games`: Generic, Pokémon and Yu-Gi-Oh! profiles

pub mod cards;
pub mod catalog;
pub mod core;
pub mod deck;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{AttributeKey, AttributeValue, Attributes, Card, CardId, DeckItem, Tags};

pub use crate::catalog::{
    Catalog, CatalogError, CatalogPage, CatalogRecord, MemoryCatalog, FETCH_FAILED,
};

pub use crate::core::{FlashKind, FlashMessage, KeyMinter};

pub use crate::deck::{compare_names, DeckEngine, DeckView};

pub use crate::games::{GameKind, UnknownGame};

pub use crate::rules::{
    ConfigError, DeckRules, ErrorCategory, Processors, Profile, Rejection, Validation, Validators,
};

pub use crate::zones::{ZoneConfig, ZoneId, ZoneManager};
