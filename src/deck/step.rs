//! Next deck-building step.
//!
//! Derived from the aggregate on every call; never stored.

use serde::{Deserialize, Serialize};

use super::aggregate::{BattlefieldPosition, DeckAggregate};
use crate::core::DeckConfig;

/// What a deck still needs, in building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStep {
    Legend,
    Champion,
    /// First empty battlefield slot.
    Battlefield(BattlefieldPosition),
    Main,
    Rune,
    Complete,
}

/// First incomplete part of a deck.
///
/// Order: legend, champion, battlefields (lowest empty slot first),
/// main deck, rune deck. A section counts as incomplete until its
/// total equals the configured size.
#[must_use]
pub fn next_incomplete_step(deck: &DeckAggregate, config: &DeckConfig) -> BuildStep {
    if deck.legend().is_none() {
        return BuildStep::Legend;
    }
    if deck.champion().is_none() {
        return BuildStep::Champion;
    }
    if let Some(position) = BattlefieldPosition::all().find(|&p| deck.battlefield(p).is_none()) {
        return BuildStep::Battlefield(position);
    }
    if deck.main_count() != u64::from(config.main_deck_size) {
        return BuildStep::Main;
    }
    if deck.rune_count() != u64::from(config.rune_deck_size) {
        return BuildStep::Rune;
    }
    BuildStep::Complete
}
