//! Deck rules, profiles and the validation vocabulary.
//!
//! Games describe themselves with a `Profile`:
//! - Zones and the copy limit (`DeckRules`)
//! - Optional validators run before every add
//! - Optional processors around mutations, zone resolution and sorting
//!
//! The deck engine calls into these but never interprets game-specific
//! concepts directly.

pub mod hooks;
pub mod profile;
pub mod validation;

pub use hooks::{
    AfterAdd, AfterRemove, BeforeAdd, BeforeRemove, Comparator, CopyCheck, DeckCheck,
    PreAddCheck, Processors, Validators, ZoneCheck, ZoneResolver,
};
pub use profile::{ConfigError, DeckRules, Profile};
pub use validation::{ErrorCategory, Rejection, Validation};
