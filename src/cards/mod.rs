//! Card records and their attributes.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier (numeric or textual)
//! - `DeckItem`: What the deck engine needs from an item
//! - `Card`: Normalized catalog card with generic attributes
//! - `Attributes`: Game-specific key/value data

pub mod attributes;
pub mod card;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{Card, CardId, DeckItem, Tags};
