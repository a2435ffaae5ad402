//! Read-only view of a deck.
//!
//! Handed to profile hooks and used by the engine's own queries. A view
//! borrows the deck; it cannot mutate it and cannot outlive it.

use std::cmp::Ordering;

use im::Vector;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::cards::{CardId, DeckItem};
use crate::rules::DeckRules;
use crate::zones::{ZoneId, ZoneManager};

/// Borrowed, immutable access to zone contents and rules.
pub struct DeckView<'a, T> {
    zones: &'a ZoneManager<T>,
    rules: &'a DeckRules<T>,
}

impl<'a, T> Clone for DeckView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for DeckView<'a, T> {}

impl<'a, T: DeckItem> DeckView<'a, T> {
    pub(crate) fn new(zones: &'a ZoneManager<T>, rules: &'a DeckRules<T>) -> Self {
        Self { zones, rules }
    }

    /// The deck's rules.
    #[must_use]
    pub fn rules(&self) -> &'a DeckRules<T> {
        self.rules
    }

    /// Zone ids in declaration order.
    #[must_use]
    pub fn zone_ids(&self) -> &'a [ZoneId] {
        self.zones.zone_ids()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: &ZoneId) -> usize {
        self.zones.zone_size(zone)
    }

    /// Card count per zone, in declaration order.
    #[must_use]
    pub fn zone_counts(&self) -> Vec<(ZoneId, usize)> {
        self.zones
            .zone_ids()
            .iter()
            .map(|id| (id.clone(), self.zones.zone_size(id)))
            .collect()
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.total_cards()
    }

    /// Copies of a card across all zones.
    #[must_use]
    pub fn copy_count(&self, id: &CardId) -> usize {
        self.zones.copy_count(id)
    }

    /// Is the card anywhere in the deck?
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.zones.contains(id)
    }

    /// Snapshot of a zone's contents, in insertion order.
    #[must_use]
    pub fn cards(&self, zone: &ZoneId) -> Option<Vector<T>> {
        self.zones.cards(zone)
    }

    /// Iterate a zone's cards in insertion order.
    pub fn iter_zone(&self, zone: &ZoneId) -> impl Iterator<Item = &'a T> + 'a {
        self.zones.iter_zone(zone)
    }
}

/// Default deck ordering: locale-style collation of display names.
///
/// Keys are compared in order:
/// 1. Base letters, ignoring accents and case (`Éclair` before `Zebra`)
/// 2. Accents, unaccented first (`Pokemon` before `Pokémon`)
/// 3. Case, lowercase first (`kuriboh` before `Kuriboh`)
/// 4. Raw code points, so the order is total
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn case_marks(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::zones::ZoneConfig;

    #[test]
    fn test_view_queries() {
        let main = ZoneId::from_static("main");
        let extra = ZoneId::from_static("extra");
        let rules: DeckRules<Card> = DeckRules::new("main")
            .with_zone(ZoneConfig::new("main", "Main Deck"))
            .with_zone(ZoneConfig::new("extra", "Extra Deck"));
        let mut zones = ZoneManager::new(rules.zone_ids().cloned());
        zones.push(&main, Card::new(1u64, "A"));
        zones.push(&extra, Card::new(1u64, "A"));
        zones.push(&extra, Card::new(2u64, "B"));

        let view = DeckView::new(&zones, &rules);

        assert_eq!(view.total_cards(), 3);
        assert_eq!(view.copy_count(&CardId::Num(1)), 2);
        assert!(view.contains(&CardId::Num(2)));
        assert_eq!(view.zone_counts(), vec![(main.clone(), 1), (extra.clone(), 2)]);
        assert_eq!(view.iter_zone(&extra).count(), 2);
        assert_eq!(view.cards(&main).map(|c| c.len()), Some(1));
        assert_eq!(view.rules().default_zone, main);
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_names("kuriboh", "Kuriboh"), Ordering::Less);
        assert_eq!(compare_names("Kuriboh", "Kuriboh"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_accents() {
        assert_eq!(compare_names("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(compare_names("Pokédex", "Pokemon Fan Club"), Ordering::Less);
        assert_eq!(compare_names("Pokemon", "Pokémon"), Ordering::Less);
        // Precomposed and decomposed spellings differ only in the last key.
        assert_ne!(compare_names("Pok\u{e9}mon", "Poke\u{301}mon"), Ordering::Equal);

        let mut names = vec!["Zebra", "Éclair", "Pokemon Fan Club", "Pokédex"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Éclair", "Pokédex", "Pokemon Fan Club", "Zebra"]);
    }
}
