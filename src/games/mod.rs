//! Game profiles.
//!
//! Each game is plain data: a [`Profile`] built from zones, validators and
//! processors, plus a normalizer for its catalog's raw records. The engine
//! never branches on which game it is running.
//!
//! - `generic`: One unbounded zone, no extra rules
//! - `pokemon`: 60-card single zone, 4-copy limit, Basic Energy exempt
//! - `yugioh`: Main/extra split, 3-copy limit tightened by the banlist

pub mod generic;
pub mod pokemon;
pub mod yugioh;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::KeyMinter;
use crate::deck::DeckView;
use crate::rules::Profile;

/// Supported games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Generic,
    Pokemon,
    Yugioh,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Generic, GameKind::Pokemon, GameKind::Yugioh];

    /// Identifier used in configuration and profile names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Pokemon => "pokemon",
            Self::Yugioh => "yugioh",
        }
    }

    /// Build this game's profile.
    #[must_use]
    pub fn profile(self) -> Profile<Card> {
        match self {
            Self::Generic => generic::profile(),
            Self::Pokemon => pokemon::profile(),
            Self::Yugioh => yugioh::profile(),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game name that matches no [`GameKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown game `{0}`")]
pub struct UnknownGame(pub String);

impl FromStr for GameKind {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGame(s.to_string()))
    }
}

/// Before-add processor giving every stored copy its own instance key.
pub(crate) fn stamp_instance(
    keys: Arc<KeyMinter>,
) -> impl Fn(&DeckView<'_, Card>, Card) -> Card + Send + Sync + 'static {
    move |_: &DeckView<'_, Card>, mut card: Card| {
        card.instance = Some(keys.mint());
        card
    }
}
