//! Deck service: the by-ID operation surface.
//!
//! `DeckService` ties the rule engine, validator and repository together.
//! Each mutation loads the deck, applies one engine operation and saves
//! the result; a rejected operation saves nothing. This is the layer a
//! thin API would call.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::CardCatalog;
use crate::core::{CardId, DeckConfig, DeckId, OwnerId};
use crate::deck::{next_incomplete_step, BuildStep, DeckAggregate};
use crate::error::DeckResult;
use crate::rules::CompositionEngine;
use crate::store::DeckRepository;
use crate::validation::{DeckValidationReport, Validator};

/// Options for `DeckService::create_deck`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateDeckOptions {
    /// Display name; defaults to "New Deck".
    pub name: Option<String>,
}

/// Options for `DeckService::get_deck`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GetDeckOptions {
    /// Attach a validation report.
    pub validate: bool,
}

/// A deck plus its validation report when requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub deck: DeckAggregate,
    pub validation: Option<DeckValidationReport>,
}

/// Deck operations addressed by deck ID.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardDefinition, CardRegistry, CardType};
/// use rift_deck::core::{CardId, OwnerId};
/// use rift_deck::service::{CreateDeckOptions, DeckService};
/// use rift_deck::store::InMemoryDeckRepository;
///
/// let registry: CardRegistry =
///     std::iter::once(CardDefinition::new("u1", "Scout", CardType::Unit)).collect();
/// let mut service = DeckService::new(InMemoryDeckRepository::new(), &registry);
///
/// let deck = service
///     .create_deck(OwnerId::new("alice"), CreateDeckOptions::default())
///     .unwrap();
/// let deck = service.add_main_card(deck.id(), &CardId::new("u1"), 2).unwrap();
/// assert_eq!(deck.main_count(), 2);
/// ```
pub struct DeckService<R, C> {
    repository: R,
    engine: CompositionEngine<C>,
    validator: Validator<C>,
}

impl<R, C> DeckService<R, C>
where
    R: DeckRepository,
    C: CardCatalog + Clone,
{
    /// Create a service with the default limits.
    pub fn new(repository: R, catalog: C) -> Self {
        Self::with_config(repository, catalog, DeckConfig::default())
    }

    pub fn with_config(repository: R, catalog: C, config: DeckConfig) -> Self {
        Self {
            repository,
            engine: CompositionEngine::with_config(catalog.clone(), config.clone()),
            validator: Validator::with_config(catalog, config),
        }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[must_use]
    pub fn engine(&self) -> &CompositionEngine<C> {
        &self.engine
    }

    // === Lifecycle ===

    /// Create an empty deck for `owner`.
    pub fn create_deck(
        &mut self,
        owner: OwnerId,
        options: CreateDeckOptions,
    ) -> DeckResult<DeckAggregate> {
        let mut deck = self.repository.create(owner)?;
        if let Some(name) = options.name {
            deck = self.repository.save(&self.engine.rename(&deck, &name))?;
        }
        info!(deck_id = %deck.id(), owner = %deck.owner(), "deck created");
        Ok(deck)
    }

    /// Load a deck, validating it when `options.validate` is set.
    pub fn get_deck(&self, id: DeckId, options: GetDeckOptions) -> DeckResult<DeckView> {
        let deck = self.repository.load(id)?;
        let validation = options.validate.then(|| self.validator.validate(&deck));
        Ok(DeckView { deck, validation })
    }

    /// All decks of an owner.
    pub fn list_decks(&self, owner: &OwnerId) -> DeckResult<Vec<DeckAggregate>> {
        self.repository.list_by_owner(owner)
    }

    /// Delete a deck. Unknown IDs fail with `NotFound`.
    pub fn delete_deck(&mut self, id: DeckId) -> DeckResult<()> {
        self.repository.delete(id)?;
        info!(deck_id = %id, "deck deleted");
        Ok(())
    }

    // === Mutations ===

    pub fn rename_deck(&mut self, id: DeckId, name: &str) -> DeckResult<DeckAggregate> {
        self.mutate(id, "rename", |engine, deck| Ok(engine.rename(deck, name)))
    }

    pub fn set_legend(&mut self, id: DeckId, card: &CardId) -> DeckResult<DeckAggregate> {
        self.mutate(id, "set_legend", |engine, deck| engine.set_legend(deck, card))
    }

    pub fn set_champion(&mut self, id: DeckId, card: &CardId) -> DeckResult<DeckAggregate> {
        self.mutate(id, "set_champion", |engine, deck| engine.set_champion(deck, card))
    }

    /// Fill (or with `None`, clear) battlefield slot `position` (1-3).
    pub fn set_battlefield(
        &mut self,
        id: DeckId,
        position: u8,
        card: Option<&CardId>,
    ) -> DeckResult<DeckAggregate> {
        self.mutate(id, "set_battlefield", |engine, deck| {
            engine.set_battlefield(deck, position, card)
        })
    }

    pub fn add_main_card(
        &mut self,
        id: DeckId,
        card: &CardId,
        delta: u32,
    ) -> DeckResult<DeckAggregate> {
        self.mutate(id, "add_main_card", |engine, deck| {
            engine.add_main_card(deck, card, delta)
        })
    }

    pub fn set_main_card_quantity(
        &mut self,
        id: DeckId,
        card: &CardId,
        quantity: u32,
    ) -> DeckResult<DeckAggregate> {
        self.mutate(id, "set_main_card_quantity", |engine, deck| {
            engine.set_main_card_quantity(deck, card, quantity)
        })
    }

    pub fn remove_main_card(&mut self, id: DeckId, card: &CardId) -> DeckResult<DeckAggregate> {
        self.mutate(id, "remove_main_card", |engine, deck| {
            Ok(engine.remove_main_card(deck, card))
        })
    }

    pub fn add_rune_card(
        &mut self,
        id: DeckId,
        card: &CardId,
        delta: u32,
    ) -> DeckResult<DeckAggregate> {
        self.mutate(id, "add_rune_card", |engine, deck| {
            engine.add_rune_card(deck, card, delta)
        })
    }

    pub fn set_rune_card_quantity(
        &mut self,
        id: DeckId,
        card: &CardId,
        quantity: u32,
    ) -> DeckResult<DeckAggregate> {
        self.mutate(id, "set_rune_card_quantity", |engine, deck| {
            engine.set_rune_card_quantity(deck, card, quantity)
        })
    }

    pub fn remove_rune_card(&mut self, id: DeckId, card: &CardId) -> DeckResult<DeckAggregate> {
        self.mutate(id, "remove_rune_card", |engine, deck| {
            Ok(engine.remove_rune_card(deck, card))
        })
    }

    // === Validation ===

    /// Validate a stored deck.
    pub fn validate(&self, id: DeckId) -> DeckResult<DeckValidationReport> {
        let deck = self.repository.load(id)?;
        Ok(self.validator.validate(&deck))
    }

    /// Validate a deck value directly.
    #[must_use]
    pub fn validate_deck(&self, deck: &DeckAggregate) -> DeckValidationReport {
        self.validator.validate(deck)
    }

    /// Next thing the stored deck still needs.
    pub fn next_step(&self, id: DeckId) -> DeckResult<BuildStep> {
        let deck = self.repository.load(id)?;
        Ok(next_incomplete_step(&deck, self.engine.config()))
    }

    fn mutate<F>(
        &mut self,
        id: DeckId,
        operation: &'static str,
        apply: F,
    ) -> DeckResult<DeckAggregate>
    where
        F: FnOnce(&CompositionEngine<C>, &DeckAggregate) -> DeckResult<DeckAggregate>,
    {
        let result = self
            .repository
            .load(id)
            .and_then(|deck| apply(&self.engine, &deck))
            .and_then(|next| self.repository.save(&next));

        match &result {
            Ok(deck) => {
                debug!(deck_id = %id, operation, revision = deck.revision(), "deck updated");
            }
            Err(error) => {
                warn!(deck_id = %id, operation, kind = %error.kind(), %error, "deck update failed");
            }
        }
        result
    }
}
