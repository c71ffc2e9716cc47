//! Card catalog lookup.
//!
//! The deck rules only ever ask one question of the catalog: "what is
//! card X?". `CardCatalog` is that contract; `CardRegistry` is an
//! in-memory implementation for tests and embedded use.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardType};
use crate::core::CardId;
use crate::error::{DeckError, DeckResult};

/// Read-only card lookup.
///
/// Implementations backed by a remote catalog return owned definitions;
/// a missing card is reported as `DeckError::CardNotFound`.
pub trait CardCatalog {
    /// Resolve a card by ID.
    fn lookup(&self, id: &CardId) -> DeckResult<CardDefinition>;
}

impl<T: CardCatalog + ?Sized> CardCatalog for &T {
    fn lookup(&self, id: &CardId) -> DeckResult<CardDefinition> {
        (**self).lookup(id)
    }
}

/// In-memory card catalog.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardCatalog, CardDefinition, CardRegistry, CardType};
/// use rift_deck::core::CardId;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("OGN-007", "Fury Rune", CardType::Rune));
///
/// let rune = registry.lookup(&CardId::new("OGN-007")).unwrap();
/// assert_eq!(rune.card_type, CardType::Rune);
/// assert!(registry.lookup(&CardId::new("missing")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }

    /// Champions that can be paired with a legend.
    pub fn champions_for<'a>(
        &'a self,
        legend: &'a CardDefinition,
    ) -> impl Iterator<Item = &'a CardDefinition> + 'a {
        self.find_by_type(CardType::Champion)
            .filter(move |c| crate::rules::is_compatible(legend, c))
    }
}

impl CardCatalog for CardRegistry {
    fn lookup(&self, id: &CardId) -> DeckResult<CardDefinition> {
        self.cards
            .get(id)
            .cloned()
            .ok_or_else(|| DeckError::CardNotFound(id.clone()))
    }
}

impl FromIterator<CardDefinition> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
