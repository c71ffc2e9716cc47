//! Deck persistence contract.
//!
//! The rule engine never touches storage; callers load a deck, apply an
//! operation and save the result. `InMemoryDeckRepository` detects lost
//! updates with a per-deck revision counter.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{DeckId, OwnerId};
use crate::deck::{DeckAggregate, DEFAULT_DECK_NAME};
use crate::error::{DeckError, DeckResult};

/// Storage for deck aggregates.
pub trait DeckRepository {
    /// Create and store an empty deck with a fresh ID.
    fn create(&mut self, owner: OwnerId) -> DeckResult<DeckAggregate>;

    /// Load a deck.
    fn load(&self, id: DeckId) -> DeckResult<DeckAggregate>;

    /// Store a deck loaded earlier and return the stored version.
    ///
    /// Fails with `Conflict` if the deck was saved by someone else since
    /// it was loaded, and `NotFound` if it was deleted.
    fn save(&mut self, deck: &DeckAggregate) -> DeckResult<DeckAggregate>;

    /// Delete a deck immediately.
    fn delete(&mut self, id: DeckId) -> DeckResult<()>;

    /// All decks of one owner.
    fn list_by_owner(&self, owner: &OwnerId) -> DeckResult<Vec<DeckAggregate>>;
}

/// Repository backed by a hash map.
///
/// ## Example
///
/// ```
/// use rift_deck::core::OwnerId;
/// use rift_deck::store::{DeckRepository, InMemoryDeckRepository};
///
/// let mut repo = InMemoryDeckRepository::new();
/// let deck = repo.create(OwnerId::new("alice")).unwrap();
///
/// let saved = repo.save(&deck).unwrap();
/// assert_eq!(saved.revision(), deck.revision() + 1);
///
/// // Saving the stale copy again is a conflict.
/// assert!(repo.save(&deck).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryDeckRepository {
    decks: FxHashMap<DeckId, DeckAggregate>,
}

impl InMemoryDeckRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

impl DeckRepository for InMemoryDeckRepository {
    fn create(&mut self, owner: OwnerId) -> DeckResult<DeckAggregate> {
        let deck = DeckAggregate::new(DeckId::generate(), owner, DEFAULT_DECK_NAME);
        self.decks.insert(deck.id(), deck.clone());
        Ok(deck)
    }

    fn load(&self, id: DeckId) -> DeckResult<DeckAggregate> {
        self.decks.get(&id).cloned().ok_or(DeckError::NotFound(id))
    }

    fn save(&mut self, deck: &DeckAggregate) -> DeckResult<DeckAggregate> {
        let stored = self
            .decks
            .get_mut(&deck.id())
            .ok_or(DeckError::NotFound(deck.id()))?;

        if stored.revision() != deck.revision() {
            debug!(
                deck_id = %deck.id(),
                expected = deck.revision(),
                found = stored.revision(),
                "stale deck save"
            );
            return Err(DeckError::Conflict {
                deck: deck.id(),
                expected: deck.revision(),
                found: stored.revision(),
            });
        }

        let mut next = deck.clone();
        next.set_revision(deck.revision() + 1);
        *stored = next.clone();
        Ok(next)
    }

    fn delete(&mut self, id: DeckId) -> DeckResult<()> {
        self.decks
            .remove(&id)
            .map(|_| ())
            .ok_or(DeckError::NotFound(id))
    }

    fn list_by_owner(&self, owner: &OwnerId) -> DeckResult<Vec<DeckAggregate>> {
        let mut decks: Vec<DeckAggregate> = self
            .decks
            .values()
            .filter(|d| d.owner() == owner)
            .cloned()
            .collect();
        decks.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().raw().cmp(&b.id().raw())));
        Ok(decks)
    }
}
