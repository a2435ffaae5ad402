//! Validation outcomes.
//!
//! Every check in the add pipeline returns a [`Validation`]: `Ok(())` to
//! let the card through, or a [`Rejection`] that stops the pipeline.

use crate::zones::ZoneId;

/// Outcome of a single check.
pub type Validation = Result<(), Rejection>;

/// Broad class of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The profile could not place the card. A configuration bug.
    Structural,
    /// A zone or deck-wide limit was reached.
    Capacity,
    /// A game-specific restriction (ban, duplicate limit).
    Legality,
    /// The catalog lookup failed.
    Transport,
}

/// Why a card was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No zone id could be resolved for the card.
    #[error("Could not determine the appropriate deck zone for this card")]
    NoZone,

    /// A zone resolver named a zone the profile does not declare.
    #[error("Zone `{0}` is not declared by this deck profile")]
    UnknownZone(ZoneId),

    /// The resolved zone is at its declared capacity.
    #[error("{zone} cannot exceed {max} cards")]
    ZoneFull { zone: String, max: usize },

    /// A profile-wide capacity rule refused the card.
    #[error("{0}")]
    Capacity(String),

    /// A game rule refused the card.
    #[error("{0}")]
    Rule(String),
}

impl Rejection {
    /// Capacity failure with a custom message.
    pub fn capacity(message: impl Into<String>) -> Self {
        Self::Capacity(message.into())
    }

    /// Rule failure with a custom message.
    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule(message.into())
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Rejection::NoZone | Rejection::UnknownZone(_) => ErrorCategory::Structural,
            Rejection::ZoneFull { .. } | Rejection::Capacity(_) => ErrorCategory::Capacity,
            Rejection::Rule(_) => ErrorCategory::Legality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_full_message() {
        let rejection = Rejection::ZoneFull {
            zone: "Extra Deck".to_string(),
            max: 15,
        };
        assert_eq!(rejection.to_string(), "Extra Deck cannot exceed 15 cards");
        assert_eq!(rejection.category(), ErrorCategory::Capacity);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Rejection::NoZone.category(), ErrorCategory::Structural);
        assert_eq!(
            Rejection::UnknownZone(ZoneId::new("side")).category(),
            ErrorCategory::Structural
        );
        assert_eq!(Rejection::capacity("full").category(), ErrorCategory::Capacity);
        assert_eq!(Rejection::rule("banned").category(), ErrorCategory::Legality);
    }

    #[test]
    fn test_custom_messages_pass_through() {
        assert_eq!(Rejection::rule("Pot of Greed is banned").to_string(), "Pot of Greed is banned");
        assert_eq!(
            Rejection::NoZone.to_string(),
            "Could not determine the appropriate deck zone for this card"
        );
    }
}
