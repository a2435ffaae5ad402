//! Zone manager for deck contents.
//!
//! The `ZoneManager` owns one ordered list per declared zone and tracks
//! copies by catalog id. It supports:
//! - A fixed key set, declared once at construction
//! - Multiset membership (the same card id may appear many times)
//! - Stable first-match removal in declaration order
//! - O(1) read-only snapshots via persistent vectors

use std::fmt;

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::{CardId, DeckItem};

use super::config::ZoneId;

/// Per-zone card lists for one deck.
///
/// ## Usage
///
/// ```
/// use ccg_deck::cards::{Card, CardId};
/// use ccg_deck::zones::{ZoneId, ZoneManager};
///
/// let main = ZoneId::from_static("main");
/// let mut zones = ZoneManager::new([main.clone()]);
///
/// zones.push(&main, Card::new(1u64, "Dark Magician"));
/// zones.push(&main, Card::new(1u64, "Dark Magician"));
///
/// assert_eq!(zones.copy_count(&CardId::Num(1)), 2);
/// assert_eq!(zones.zone_size(&main), 2);
/// ```
#[derive(Clone)]
pub struct ZoneManager<T> {
    /// Zone ids in declaration order.
    order: Vec<ZoneId>,

    /// Card lists, one per declared zone.
    contents: FxHashMap<ZoneId, Vector<T>>,
}

// `im::Vector` only implements `Debug` for `Clone` elements, so the
// bound has to be spelled out here instead of derived.
impl<T: Clone + fmt::Debug> fmt::Debug for ZoneManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zones: Vec<_> = self
            .order
            .iter()
            .filter_map(|zone| self.contents.get(zone).map(|cards| (zone, cards)))
            .collect();
        f.debug_struct("ZoneManager").field("zones", &zones).finish()
    }
}

impl<T: DeckItem> ZoneManager<T> {
    /// Create a manager with one empty list per zone.
    ///
    /// Duplicate ids collapse to the first occurrence.
    pub fn new(zones: impl IntoIterator<Item = ZoneId>) -> Self {
        let mut order = Vec::new();
        let mut contents = FxHashMap::default();
        for zone in zones {
            if contents.insert(zone.clone(), Vector::new()).is_none() {
                order.push(zone);
            }
        }
        Self { order, contents }
    }

    /// Zone ids in declaration order.
    #[must_use]
    pub fn zone_ids(&self) -> &[ZoneId] {
        &self.order
    }

    /// Is this zone declared?
    #[must_use]
    pub fn has_zone(&self, zone: &ZoneId) -> bool {
        self.contents.contains_key(zone)
    }

    /// Append a card to a zone.
    ///
    /// Returns `false` (and stores nothing) if the zone is not declared.
    pub fn push(&mut self, zone: &ZoneId, card: T) -> bool {
        match self.contents.get_mut(zone) {
            Some(list) => {
                list.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Remove the first copy of a card, scanning zones in declaration order.
    ///
    /// Returns the zone it came from and the removed card.
    pub fn remove_first(&mut self, id: &CardId) -> Option<(ZoneId, T)> {
        for zone in &self.order {
            let Some(list) = self.contents.get_mut(zone) else {
                continue;
            };
            if let Some(index) = list.iter().position(|c| c.card_id() == id) {
                let card = list.remove(index);
                return Some((zone.clone(), card));
            }
        }
        None
    }

    /// Read-only snapshot of a zone. Cheap: shares structure with the
    /// stored list.
    #[must_use]
    pub fn cards(&self, zone: &ZoneId) -> Option<Vector<T>> {
        self.contents.get(zone).cloned()
    }

    /// Iterate a zone's cards in insertion order.
    pub fn iter_zone(&self, zone: &ZoneId) -> impl Iterator<Item = &T> + '_ {
        self.contents.get(zone).into_iter().flat_map(Vector::iter)
    }

    /// Number of cards in a zone (0 for undeclared zones).
    #[must_use]
    pub fn zone_size(&self, zone: &ZoneId) -> usize {
        self.contents.get(zone).map_or(0, Vector::len)
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.contents.values().map(Vector::len).sum()
    }

    /// Copies of a card across all zones.
    #[must_use]
    pub fn copy_count(&self, id: &CardId) -> usize {
        self.contents
            .values()
            .map(|list| list.iter().filter(|c| c.card_id() == id).count())
            .sum()
    }

    /// Is at least one copy of the card anywhere in the deck?
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.contents
            .values()
            .any(|list| list.iter().any(|c| c.card_id() == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn zones() -> (ZoneId, ZoneId, ZoneManager<Card>) {
        let main = ZoneId::from_static("main");
        let extra = ZoneId::from_static("extra");
        let manager = ZoneManager::new([main.clone(), extra.clone()]);
        (main, extra, manager)
    }

    #[test]
    fn test_new_has_declared_zones() {
        let (main, extra, manager) = zones();

        assert_eq!(manager.zone_ids(), &[main.clone(), extra.clone()]);
        assert!(manager.has_zone(&main));
        assert!(!manager.has_zone(&ZoneId::new("side")));
        assert_eq!(manager.total_cards(), 0);
    }

    #[test]
    fn test_duplicate_zone_ids_collapse() {
        let main = ZoneId::from_static("main");
        let manager: ZoneManager<Card> = ZoneManager::new([main.clone(), main.clone()]);
        assert_eq!(manager.zone_ids().len(), 1);
    }

    #[test]
    fn test_push_and_counts() {
        let (main, extra, mut manager) = zones();

        assert!(manager.push(&main, Card::new(1u64, "A")));
        assert!(manager.push(&main, Card::new(2u64, "B")));
        assert!(manager.push(&extra, Card::new(1u64, "A")));

        assert_eq!(manager.zone_size(&main), 2);
        assert_eq!(manager.zone_size(&extra), 1);
        assert_eq!(manager.total_cards(), 3);
        assert_eq!(manager.copy_count(&CardId::Num(1)), 2);
        assert!(manager.contains(&CardId::Num(2)));
        assert!(!manager.contains(&CardId::Num(3)));
    }

    #[test]
    fn test_push_to_unknown_zone() {
        let (_, _, mut manager) = zones();

        assert!(!manager.push(&ZoneId::new("side"), Card::new(1u64, "A")));
        assert_eq!(manager.total_cards(), 0);
        assert_eq!(manager.zone_ids().len(), 2);
    }

    #[test]
    fn test_remove_first_in_declaration_order() {
        let (main, extra, mut manager) = zones();

        manager.push(&extra, Card::new(1u64, "A").with_attr("slot", 0i32));
        manager.push(&main, Card::new(1u64, "A").with_attr("slot", 1i32));
        manager.push(&main, Card::new(1u64, "A").with_attr("slot", 2i32));

        let (zone, card) = manager.remove_first(&CardId::Num(1)).unwrap();
        assert_eq!(zone, main);
        assert_eq!(card.get_int("slot"), Some(1));

        let (zone, card) = manager.remove_first(&CardId::Num(1)).unwrap();
        assert_eq!(zone, main);
        assert_eq!(card.get_int("slot"), Some(2));

        let (zone, _) = manager.remove_first(&CardId::Num(1)).unwrap();
        assert_eq!(zone, extra);

        assert!(manager.remove_first(&CardId::Num(1)).is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let (main, _, mut manager) = zones();
        manager.push(&main, Card::new(1u64, "A"));

        let snapshot = manager.cards(&main).unwrap();
        manager.push(&main, Card::new(2u64, "B"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(manager.zone_size(&main), 2);
        assert_eq!(manager.iter_zone(&main).count(), 2);
    }

    #[test]
    fn test_debug_lists_zones_in_order() {
        let (main, _, mut manager) = zones();
        manager.push(&main, Card::new(7u64, "Kuriboh"));

        let debug = format!("{manager:?}");
        assert!(debug.starts_with("ZoneManager"));
        assert!(debug.contains("Kuriboh"));

        let main_at = debug.find("main").unwrap();
        let extra_at = debug.find("extra").unwrap();
        assert!(main_at < extra_at);
    }
}
