//! Yu-Gi-Oh! profile tests.
//!
//! - Main/extra routing by frame type
//! - Banlist tiers on top of the 3-copy limit
//! - Deck size rules and frame-type ordering

use std::sync::Arc;

use ccg_deck::cards::{Card, CardId};
use ccg_deck::catalog::MemoryCatalog;
use ccg_deck::core::KeyMinter;
use ccg_deck::deck::DeckEngine;
use ccg_deck::games::yugioh::{self, YugiohRaw, EXTRA, MAIN};
use ccg_deck::rules::{ErrorCategory, Rejection};

type Engine = DeckEngine<Card, MemoryCatalog<YugiohRaw, Card>>;

fn deck() -> Engine {
    let profile = yugioh::profile_with_keys(Arc::new(KeyMinter::new(3)));
    DeckEngine::new(profile, yugioh::catalog_from_json("[]").unwrap()).unwrap()
}

fn card(id: u64, name: &str, frame: &str) -> Card {
    Card::new(id, name).with_kind(frame)
}

fn banned(id: u64, name: &str) -> Card {
    card(id, name, "spell").with_attr(yugioh::ATTR_BAN_TCG, "Banned")
}

/// A banned card is rejected on the very first add.
#[test]
fn test_banned_card_rejected() {
    let mut deck = deck();
    let pot = banned(55144522, "Pot of Greed");

    assert!(!deck.add_card(&pot));
    assert_eq!(
        deck.error().map(|e| e.content.as_str()),
        Some("Pot of Greed is banned and cannot be used")
    );
    assert_eq!(deck.can_add(&pot).unwrap_err().category(), ErrorCategory::Legality);
    assert_eq!(deck.zone_counts(), vec![(MAIN, 0), (EXTRA, 0)]);
}

#[test]
fn test_limited_and_semi_limited() {
    let mut deck = deck();
    let limited = card(1, "Monster Reborn", "spell").with_attr(yugioh::ATTR_BAN_TCG, "Limited");
    let semi = card(2, "Dark World Dealings", "spell")
        .with_attr(yugioh::ATTR_BAN_OCG, "Semi-Limited");

    assert!(deck.add_card(&limited));
    assert!(!deck.add_card(&limited));
    assert_eq!(
        deck.error().map(|e| e.content.as_str()),
        Some("Monster Reborn is limited to 1 copy")
    );

    assert!(deck.add_card(&semi));
    assert!(deck.add_card(&semi));
    assert!(!deck.add_card(&semi));
    assert_eq!(
        deck.error().map(|e| e.content.as_str()),
        Some("Dark World Dealings is semi-limited to 2 copies")
    );
}

#[test]
fn test_three_copy_limit() {
    let mut deck = deck();
    let kuriboh = card(40640057, "Kuriboh", "effect");

    for _ in 0..3 {
        assert!(deck.add_card(&kuriboh));
    }
    assert_eq!(
        deck.can_add(&kuriboh),
        Err(Rejection::rule("You cannot have more than 3 copies of Kuriboh"))
    );
}

/// Extra deck monsters skip the main zone even though it is declared first.
#[test]
fn test_extra_deck_routing() {
    let mut deck = deck();
    let utopia = card(84013237, "Number 39: Utopia", "xyz");
    let magician = card(46986414, "Dark Magician", "normal");

    assert_eq!(deck.determine_zone(&utopia), Some(EXTRA));
    assert_eq!(deck.determine_zone(&magician), Some(MAIN));

    assert!(deck.add_card(&utopia));
    assert!(deck.add_card(&magician));
    assert_eq!(deck.zone_counts(), vec![(MAIN, 1), (EXTRA, 1)]);
}

#[test]
fn test_extra_deck_capacity() {
    let mut deck = deck();
    for id in 0..15 {
        assert!(deck.add_card(&card(id, &format!("Link {id}"), "link")));
    }

    assert!(!deck.add_card(&card(99, "Link 99", "link")));
    assert_eq!(
        deck.error().map(|e| e.content.as_str()),
        Some("Extra Deck cannot exceed 15 cards")
    );
    assert_eq!(deck.zone_size(&EXTRA), 15);

    // Main deck is unaffected.
    assert!(deck.add_card(&card(100, "Kuriboh", "effect")));
}

#[test]
fn test_complete_deck_rules() {
    let mut deck = deck();
    for id in 0..39 {
        deck.add_card(&card(id, &format!("Monster {id}"), "normal"));
    }
    assert_eq!(
        deck.validate_deck(),
        Err(Rejection::capacity("Main Deck must contain at least 40 cards"))
    );

    deck.add_card(&card(39, "Monster 39", "normal"));
    assert_eq!(deck.validate_deck(), Ok(()));

    for id in 40..60 {
        deck.add_card(&card(id, &format!("Monster {id}"), "normal"));
    }
    assert_eq!(deck.zone_size(&MAIN), 60);
    assert_eq!(deck.validate_deck(), Ok(()));
    assert!(!deck.add_card(&card(60, "Monster 60", "normal")));
}

#[test]
fn test_sorted_main_deck() {
    let mut deck = deck();
    for c in [
        card(1, "Mirror Force", "trap"),
        card(2, "Raigeki", "spell"),
        card(3, "Kuriboh", "effect"),
        card(4, "Dark Magician", "normal"),
        card(5, "Blue-Eyes White Dragon", "normal"),
        card(6, "Odd-Eyes Pendulum Dragon", "effect_pendulum"),
        card(7, "Token", "token"),
    ] {
        deck.add_card(&c);
    }

    let names: Vec<String> = deck.sorted_zone(&MAIN).into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Blue-Eyes White Dragon",
            "Dark Magician",
            "Kuriboh",
            "Odd-Eyes Pendulum Dragon",
            "Raigeki",
            "Mirror Force",
            "Token",
        ]
    );
}

#[test]
fn test_sorted_extra_deck() {
    let mut deck = deck();
    for c in [
        card(1, "Decode Talker", "link"),
        card(2, "Utopia", "xyz"),
        card(3, "Stardust Dragon", "synchro"),
        card(4, "Blue-Eyes Ultimate Dragon", "fusion"),
        card(5, "Abyss Dweller", "xyz"),
    ] {
        deck.add_card(&c);
    }

    let names: Vec<String> = deck.sorted_zone(&EXTRA).into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Blue-Eyes Ultimate Dragon",
            "Stardust Dragon",
            "Abyss Dweller",
            "Utopia",
            "Decode Talker",
        ]
    );
}

#[tokio::test]
async fn test_search_and_build_from_records() {
    let catalog = yugioh::catalog_from_json(
        r#"[
            {"id": 46986414, "name": "Dark Magician", "frameType": "normal", "atk": 2500, "def": 2100, "level": 7,
             "card_images": [{"image_url_small": "https://images.ygoprodeck.com/images/cards_small/46986414.jpg"}]},
            {"id": 38033121, "name": "Dark Magician Girl", "frameType": "effect", "atk": 2000, "def": 1700, "level": 6},
            {"id": 84013237, "name": "Number 39: Utopia", "frameType": "xyz", "level": 4},
            {"id": 55144522, "name": "Pot of Greed", "frameType": "spell",
             "banlist_info": {"ban_tcg": "Banned", "ban_ocg": "Banned"}}
        ]"#,
    )
    .unwrap();
    let profile = yugioh::profile_with_keys(Arc::new(KeyMinter::new(3)));
    let mut deck = DeckEngine::new(profile, catalog).unwrap();

    deck.search("").await;
    let results = deck.search_results().to_vec();
    assert_eq!(results.len(), 4);

    for card in &results {
        deck.add_card(card);
    }

    assert_eq!(deck.zone_counts(), vec![(MAIN, 2), (EXTRA, 1)]);
    assert!(!deck.contains(&CardId::Num(55144522)));
    assert_eq!(
        deck.error().map(|e| e.content.as_str()),
        Some("Pot of Greed is banned and cannot be used")
    );
}
