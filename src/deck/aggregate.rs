//! Deck aggregate: the full state of one deck.
//!
//! A `DeckAggregate` is a plain value. Line items live in `im::OrdMap`s,
//! so cloning is O(1) and every rule-engine operation can return a new
//! aggregate without copying the sections. Totals are always recomputed
//! from the line items.
//!
//! Fields are private: only the rule engine (and the repository, for the
//! revision counter) write to a deck.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId, OwnerId, BATTLEFIELD_SLOTS};
use crate::error::{DeckError, DeckResult};

/// Name given to decks created without one.
pub const DEFAULT_DECK_NAME: &str = "New Deck";

/// A quantity-bearing deck section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Main,
    Rune,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Main => f.write_str("main"),
            Section::Rune => f.write_str("rune"),
        }
    }
}

/// One of the three battlefield slots, numbered 1 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BattlefieldPosition(u8);

impl BattlefieldPosition {
    /// Validate a 1-based slot number.
    pub fn new(position: u8) -> DeckResult<Self> {
        if (1..=BATTLEFIELD_SLOTS as u8).contains(&position) {
            Ok(Self(position))
        } else {
            Err(DeckError::InvalidPosition(position))
        }
    }

    /// 1-based slot number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index into the slot array.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All positions in slot order.
    pub fn all() -> impl Iterator<Item = BattlefieldPosition> {
        (1..=BATTLEFIELD_SLOTS as u8).map(BattlefieldPosition)
    }
}

impl TryFrom<u8> for BattlefieldPosition {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BattlefieldPosition> for u8 {
    fn from(position: BattlefieldPosition) -> Self {
        position.0
    }
}

impl std::fmt::Display for BattlefieldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card and how many copies of it a section holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub card: CardId,
    pub quantity: u32,
}

/// Full state of one deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckAggregate {
    id: DeckId,
    owner: OwnerId,
    name: String,

    /// Bumped by the repository on every successful save.
    revision: u64,

    legend: Option<CardId>,
    champion: Option<CardId>,
    battlefields: [Option<CardId>; BATTLEFIELD_SLOTS],

    main: OrdMap<CardId, u32>,
    runes: OrdMap<CardId, u32>,
}

impl DeckAggregate {
    /// Create an empty deck.
    #[must_use]
    pub fn new(id: DeckId, owner: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            revision: 0,
            legend: None,
            champion: None,
            battlefields: Default::default(),
            main: OrdMap::new(),
            runes: OrdMap::new(),
        }
    }

    // === Identity ===

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // === Legend, champion, battlefields ===

    #[must_use]
    pub fn legend(&self) -> Option<&CardId> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn champion(&self) -> Option<&CardId> {
        self.champion.as_ref()
    }

    /// Card in a battlefield slot, if any.
    #[must_use]
    pub fn battlefield(&self, position: BattlefieldPosition) -> Option<&CardId> {
        self.battlefields[position.index()].as_ref()
    }

    /// All three slots in order.
    #[must_use]
    pub fn battlefields(&self) -> &[Option<CardId>; BATTLEFIELD_SLOTS] {
        &self.battlefields
    }

    /// Number of filled battlefield slots.
    #[must_use]
    pub fn battlefield_count(&self) -> usize {
        self.battlefields.iter().filter(|b| b.is_some()).count()
    }

    // === Sections ===

    /// Line items of a section, ordered by card ID.
    pub fn items(&self, section: Section) -> impl Iterator<Item = LineItem> + '_ {
        self.section(section).iter().map(|(card, &quantity)| LineItem {
            card: card.clone(),
            quantity,
        })
    }

    pub fn main_items(&self) -> impl Iterator<Item = LineItem> + '_ {
        self.items(Section::Main)
    }

    pub fn rune_items(&self) -> impl Iterator<Item = LineItem> + '_ {
        self.items(Section::Rune)
    }

    /// Copies of a card in a section (0 if absent).
    #[must_use]
    pub fn quantity(&self, section: Section, card: &CardId) -> u32 {
        self.section(section).get(card).copied().unwrap_or(0)
    }

    /// Sum of quantities in a section.
    ///
    /// Widened to `u64` so a stored deck with oversized quantities still
    /// reports its real total.
    #[must_use]
    pub fn total(&self, section: Section) -> u64 {
        self.section(section).values().map(|&q| u64::from(q)).sum()
    }

    #[must_use]
    pub fn main_count(&self) -> u64 {
        self.total(Section::Main)
    }

    #[must_use]
    pub fn rune_count(&self) -> u64 {
        self.total(Section::Rune)
    }

    /// Whether nothing at all has been placed in the deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legend.is_none()
            && self.champion.is_none()
            && self.battlefield_count() == 0
            && self.main.is_empty()
            && self.runes.is_empty()
    }

    fn section(&self, section: Section) -> &OrdMap<CardId, u32> {
        match section {
            Section::Main => &self.main,
            Section::Rune => &self.runes,
        }
    }

    // === Writers (rule engine and repository only) ===

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }

    pub(crate) fn set_legend(&mut self, legend: Option<CardId>) {
        self.legend = legend;
    }

    pub(crate) fn set_champion(&mut self, champion: Option<CardId>) {
        self.champion = champion;
    }

    pub(crate) fn set_battlefield(&mut self, position: BattlefieldPosition, card: Option<CardId>) {
        self.battlefields[position.index()] = card;
    }

    /// Set a line item quantity; 0 removes the item.
    pub(crate) fn set_quantity(&mut self, section: Section, card: CardId, quantity: u32) {
        let items = match section {
            Section::Main => &mut self.main,
            Section::Rune => &mut self.runes,
        };
        if quantity == 0 {
            items.remove(&card);
        } else {
            items.insert(card, quantity);
        }
    }
}
