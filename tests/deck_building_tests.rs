//! Deck building integration tests.
//!
//! These tests drive the public API end to end:
//! - Rule engine mutations and their failure kinds
//! - Validation of empty, partial and complete decks
//! - The by-ID service over the in-memory repository

use rift_deck::cards::{CardDefinition, CardRegistry, CardType, Domain};
use rift_deck::core::{CardId, DeckId, OwnerId};
use rift_deck::deck::{next_incomplete_step, BattlefieldPosition, BuildStep, DeckAggregate, Section};
use rift_deck::error::{DeckError, ErrorKind};
use rift_deck::rules::CompositionEngine;
use rift_deck::service::{CreateDeckOptions, DeckService, GetDeckOptions};
use rift_deck::store::InMemoryDeckRepository;
use rift_deck::validation::Validator;
use rift_deck::DeckConfig;

/// Catalog with two legends, matching champions, battlefields,
/// 20 units and 14 runes.
fn catalog() -> CardRegistry {
    let mut cards = vec![
        CardDefinition::new("legend-jinx", "Jinx, Loose Cannon", CardType::Legend)
            .with_domain(Domain::Fury)
            .with_domain(Domain::Chaos)
            .with_subtype("Jinx"),
        CardDefinition::new("legend-vi", "Vi, Piltover Enforcer", CardType::Legend)
            .with_domain(Domain::Body)
            .with_subtype("Vi"),
        CardDefinition::new("champ-jinx", "Jinx, Rebel", CardType::Champion)
            .with_domain(Domain::Chaos)
            .with_subtype("Jinx"),
        CardDefinition::new("champ-vi", "Vi, Destructive", CardType::Champion)
            .with_domain(Domain::Body)
            .with_subtype("Vi"),
        CardDefinition::new("bf-temple", "Sunken Temple", CardType::Battlefield),
        CardDefinition::new("bf-grove", "Whispering Grove", CardType::Battlefield),
        CardDefinition::new("bf-forge", "Hextech Forge", CardType::Battlefield),
        CardDefinition::new("boss", "The Boss", CardType::Unit)
            .with_domain(Domain::Fury)
            .with_attribute("Unique"),
    ];
    for i in 0..20 {
        cards.push(
            CardDefinition::new(format!("unit-{i:02}"), format!("Unit {i}"), CardType::Unit)
                .with_domain(Domain::Fury),
        );
    }
    for i in 0..14 {
        cards.push(
            CardDefinition::new(format!("rune-{i:02}"), format!("Rune {i}"), CardType::Rune)
                .with_domain(Domain::Chaos),
        );
    }
    cards.into_iter().collect()
}

fn empty_deck() -> DeckAggregate {
    DeckAggregate::new(DeckId::generate(), OwnerId::new("player-1"), "Test Deck")
}

fn id(s: &str) -> CardId {
    CardId::new(s)
}

fn unit(i: usize) -> CardId {
    CardId::new(format!("unit-{i:02}"))
}

fn rune(i: usize) -> CardId {
    CardId::new(format!("rune-{i:02}"))
}

/// Build a complete, legal deck using only engine operations.
fn build_complete(engine: &CompositionEngine<&CardRegistry>) -> DeckAggregate {
    let mut deck = engine.set_legend(&empty_deck(), &id("legend-jinx")).unwrap();
    deck = engine.set_champion(&deck, &id("champ-jinx")).unwrap();
    for (position, bf) in [(1, "bf-temple"), (2, "bf-grove"), (3, "bf-forge")] {
        deck = engine.set_battlefield(&deck, position, Some(&id(bf))).unwrap();
    }
    for i in 0..13 {
        deck = engine.add_main_card(&deck, &unit(i), 3).unwrap();
    }
    deck = engine.add_main_card(&deck, &id("boss"), 1).unwrap();
    for i in 0..12 {
        deck = engine.add_rune_card(&deck, &rune(i), 1).unwrap();
    }
    deck
}

// =============================================================================
// Scenarios
// =============================================================================

/// An empty deck reports every missing part and is invalid.
#[test]
fn test_scenario_empty_deck_validation() {
    let catalog = catalog();
    let report = Validator::new(&catalog).validate(&empty_deck());

    assert!(!report.is_valid());
    for expected in [
        "Legend is required.",
        "Champion is required.",
        "All three battlefields must be set.",
        "Main deck must have exactly 40 cards (currently 0).",
        "Rune deck must have exactly 12 cards (currently 0).",
    ] {
        assert!(report.has_error(expected), "missing: {expected}");
    }
}

/// A champion without a shared subtype is rejected and not set.
#[test]
fn test_scenario_incompatible_champion() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = engine.set_legend(&empty_deck(), &id("legend-jinx")).unwrap();

    let err = engine.set_champion(&deck, &id("champ-vi")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleChampion);
    assert_eq!(deck.champion(), None);
}

/// A fourth copy of a main card is rejected.
#[test]
fn test_scenario_copy_limit() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = engine.add_main_card(&empty_deck(), &unit(0), 3).unwrap();

    let err = engine.add_main_card(&deck, &unit(0), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CopyLimitExceeded);
    assert_eq!(deck.quantity(Section::Main, &unit(0)), 3);
}

/// The 40th card fits; the 41st does not.
#[test]
fn test_scenario_section_full() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let mut deck = empty_deck();
    for i in 0..13 {
        deck = engine.add_main_card(&deck, &unit(i), 3).unwrap();
    }
    assert_eq!(deck.main_count(), 39);

    let deck = engine.add_main_card(&deck, &unit(13), 1).unwrap();
    assert_eq!(deck.main_count(), 40);

    for card in [unit(14), unit(13), id("boss")] {
        let err = engine.add_main_card(&deck, &card, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SectionFull, "{card}");
    }
}

// =============================================================================
// Properties
// =============================================================================

/// A deck built only through successful engine operations validates.
#[test]
fn test_complete_deck_round_trip() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = build_complete(&engine);

    let report = Validator::new(&catalog).validate(&deck);
    assert!(report.is_valid(), "{:?}", report.errors());
    assert!(report.errors().is_empty());
    assert_eq!(next_incomplete_step(&deck, engine.config()), BuildStep::Complete);
}

/// Champion before legend always fails.
#[test]
fn test_champion_requires_legend() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    for champion in catalog.find_by_type(CardType::Champion) {
        let err = engine.set_champion(&empty_deck(), &champion.id).unwrap_err();
        assert_eq!(err, DeckError::MissingPrerequisite);
    }
}

/// Switching to an incompatible legend drops the champion.
#[test]
fn test_incompatible_legend_clears_champion() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = engine.set_legend(&empty_deck(), &id("legend-jinx")).unwrap();
    let deck = engine.set_champion(&deck, &id("champ-jinx")).unwrap();

    let deck = engine.set_legend(&deck, &id("legend-vi")).unwrap();
    assert_eq!(deck.champion(), None);

    let deck = engine.set_champion(&deck, &id("champ-vi")).unwrap();
    assert_eq!(deck.champion(), Some(&id("champ-vi")));
}

/// Rune quantities 0 and 1 are accepted, 2 and above rejected as copy
/// errors whatever the size of the request or the rune deck.
#[test]
fn test_rune_quantity_bounds() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let mut nearly_full = empty_deck();
    for i in 0..11 {
        nearly_full = engine.add_rune_card(&nearly_full, &rune(i), 1).unwrap();
    }
    assert_eq!(nearly_full.rune_count(), 11);

    for rune in catalog.find_by_type(CardType::Rune) {
        for deck in [empty_deck(), nearly_full.clone()] {
            assert!(engine.set_rune_card_quantity(&deck, &rune.id, 0).is_ok());
            assert!(engine.set_rune_card_quantity(&deck, &rune.id, 1).is_ok());
            for q in [2, 3, 12, 13, u32::MAX] {
                let err = engine.set_rune_card_quantity(&deck, &rune.id, q).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::CopyLimitExceeded, "{} x{q}", rune.id);
            }
        }
    }
}

/// Setting a main card past its copy limit is a copy error even when the
/// section could not hold the request either.
#[test]
fn test_set_main_quantity_checks_copies_first() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let mut deck = empty_deck();
    for i in 0..13 {
        deck = engine.add_main_card(&deck, &unit(i), 3).unwrap();
    }

    let err = engine.set_main_card_quantity(&deck, &unit(13), 41).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CopyLimitExceeded);
    let err = engine.set_main_card_quantity(&deck, &unit(13), 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SectionFull);
}

/// The rune deck caps at 12 cards.
#[test]
fn test_rune_section_full() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let mut deck = empty_deck();
    for i in 0..12 {
        deck = engine.add_rune_card(&deck, &rune(i), 1).unwrap();
    }
    let err = engine.add_rune_card(&deck, &rune(12), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SectionFull);
}

/// Removing twice is the same as removing once.
#[test]
fn test_remove_is_idempotent() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = engine.add_main_card(&empty_deck(), &unit(3), 2).unwrap();

    let once = engine.remove_main_card(&deck, &unit(3));
    let twice = engine.remove_main_card(&once, &unit(3));
    assert_eq!(once, twice);
}

/// Unique cards are capped at one copy by default.
#[test]
fn test_unique_card_cap() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let err = engine.add_main_card(&empty_deck(), &id("boss"), 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CopyLimitExceeded);

    let config = DeckConfig::default().with_unique_limit(false);
    let relaxed = CompositionEngine::with_config(&catalog, config);
    assert!(relaxed.add_main_card(&empty_deck(), &id("boss"), 2).is_ok());
}

/// Battlefield slots are independent and accept duplicates.
#[test]
fn test_battlefield_slots() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let mut deck = empty_deck();
    for position in 1..=3 {
        deck = engine.set_battlefield(&deck, position, Some(&id("bf-temple"))).unwrap();
    }
    assert_eq!(deck.battlefield_count(), 3);

    let report = Validator::new(&catalog).validate(&deck);
    assert!(!report.has_error("All three battlefields must be set."));
    assert_eq!(
        report.warnings(),
        ["Battlefield Sunken Temple is used in more than one slot."]
    );

    let deck = engine.set_battlefield(&deck, 2, None).unwrap();
    assert_eq!(deck.battlefield(BattlefieldPosition::new(2).unwrap()), None);
    assert_eq!(
        engine.set_battlefield(&deck, 5, None).unwrap_err().kind(),
        ErrorKind::InvalidPosition
    );
}

/// A stored deck over the section size reports its real total.
#[test]
fn test_validate_stored_oversized_main_deck() {
    let catalog = catalog();
    let engine = CompositionEngine::new(&catalog);
    let deck = build_complete(&engine);
    let mut json = serde_json::to_value(&deck).unwrap();
    json["main"]["unit-19"] = serde_json::json!(1);
    let stored: DeckAggregate = serde_json::from_value(json).unwrap();
    assert_eq!(stored.main_count(), 41);

    let report = Validator::new(&catalog).validate(&stored);
    assert!(!report.is_valid());
    assert!(report.has_error("Main deck must have exactly 40 cards (currently 41)."));
}

/// Quantities summing past `u32::MAX` are reported, not overflowed.
#[test]
fn test_validate_stored_deck_with_huge_quantities() {
    let catalog = catalog();
    let mut json = serde_json::to_value(empty_deck()).unwrap();
    json["runes"] = serde_json::json!({ "rune-00": u32::MAX, "rune-01": 1 });
    let stored: DeckAggregate = serde_json::from_value(json).unwrap();
    assert_eq!(stored.rune_count(), u64::from(u32::MAX) + 1);

    let report = Validator::new(&catalog).validate(&stored);
    assert!(report.has_error("Rune deck must have exactly 12 cards (currently 4294967296)."));
    assert!(report.has_error("Rune deck has 4294967295 copies of Rune 0 (maximum 1)."));
}

// =============================================================================
// Service
// =============================================================================

/// A full build through the by-ID service ends valid and complete.
#[test]
fn test_service_full_build() {
    let catalog = catalog();
    let mut service = DeckService::new(InMemoryDeckRepository::new(), &catalog);
    let deck = service
        .create_deck(
            OwnerId::new("player-1"),
            CreateDeckOptions {
                name: Some("Jinx Chaos".into()),
            },
        )
        .unwrap();
    let deck_id = deck.id();

    service.set_legend(deck_id, &id("legend-jinx")).unwrap();
    service.set_champion(deck_id, &id("champ-jinx")).unwrap();
    for (position, bf) in [(1, "bf-temple"), (2, "bf-grove"), (3, "bf-forge")] {
        service.set_battlefield(deck_id, position, Some(&id(bf))).unwrap();
    }
    for i in 0..13 {
        service.set_main_card_quantity(deck_id, &unit(i), 3).unwrap();
    }
    service.add_main_card(deck_id, &unit(13), 1).unwrap();
    for i in 0..12 {
        service.add_rune_card(deck_id, &rune(i), 1).unwrap();
    }

    let view = service.get_deck(deck_id, GetDeckOptions { validate: true }).unwrap();
    assert_eq!(view.deck.name(), "Jinx Chaos");
    let report = view.validation.unwrap();
    assert!(report.is_valid(), "{:?}", report.errors());
    assert_eq!(service.next_step(deck_id).unwrap(), BuildStep::Complete);

    let deck = service.remove_rune_card(deck_id, &rune(0)).unwrap();
    assert_eq!(deck.rune_count(), 11);
    assert!(service
        .validate(deck_id)
        .unwrap()
        .has_error("Rune deck must have exactly 12 cards (currently 11)."));
}

/// Each successful mutation bumps the stored revision.
#[test]
fn test_service_revisions() {
    let catalog = catalog();
    let mut service = DeckService::new(InMemoryDeckRepository::new(), &catalog);
    let deck = service
        .create_deck(OwnerId::new("player-1"), CreateDeckOptions::default())
        .unwrap();
    assert_eq!(deck.revision(), 0);

    let deck = service.rename_deck(deck.id(), "Renamed").unwrap();
    assert_eq!(deck.revision(), 1);

    // Rejected mutations leave the revision alone.
    assert!(service.set_champion(deck.id(), &id("champ-jinx")).is_err());
    let view = service.get_deck(deck.id(), GetDeckOptions::default()).unwrap();
    assert_eq!(view.deck.revision(), 1);
    assert_eq!(view.deck.name(), "Renamed");
}
