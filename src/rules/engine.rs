//! Composition rule engine.
//!
//! `CompositionEngine` is the only writer of deck state. Every operation
//! takes the current aggregate by reference and either returns a new,
//! fully consistent aggregate or exactly one `DeckError`. The input is
//! never modified, so a rejected mutation cannot leave a partial write.
//!
//! ## Check order
//!
//! - `set_champion`: legend present, card type, compatibility
//! - `add_*_card`: card type, section total, per-card copy limit
//! - `set_*_card_quantity`: card type, per-card copy limit, section total
//!
//! Catalog failures (`CardNotFound`) are returned as-is.

use tracing::debug;

use super::compatibility::is_compatible;
use crate::cards::{CardCatalog, CardDefinition, CardType};
use crate::core::{CardId, DeckConfig};
use crate::deck::{BattlefieldPosition, DeckAggregate, Section};
use crate::error::{DeckError, DeckResult};

/// Applies deck-building operations under the configured limits.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardDefinition, CardRegistry, CardType};
/// use rift_deck::core::{CardId, DeckId, OwnerId};
/// use rift_deck::deck::DeckAggregate;
/// use rift_deck::rules::CompositionEngine;
///
/// let registry: CardRegistry = [
///     CardDefinition::new("l1", "Jinx", CardType::Legend).with_subtype("Jinx"),
///     CardDefinition::new("c1", "Jinx, Rebel", CardType::Champion).with_subtype("Jinx"),
/// ]
/// .into_iter()
/// .collect();
///
/// let engine = CompositionEngine::new(&registry);
/// let deck = DeckAggregate::new(DeckId::generate(), OwnerId::new("me"), "Jinx");
///
/// let deck = engine.set_legend(&deck, &CardId::new("l1")).unwrap();
/// let deck = engine.set_champion(&deck, &CardId::new("c1")).unwrap();
/// assert_eq!(deck.champion(), Some(&CardId::new("c1")));
/// ```
#[derive(Clone, Debug)]
pub struct CompositionEngine<C> {
    catalog: C,
    config: DeckConfig,
}

impl<C: CardCatalog> CompositionEngine<C> {
    /// Create an engine with the default limits.
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, DeckConfig::default())
    }

    /// Create an engine with custom limits.
    pub fn with_config(catalog: C, config: DeckConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    // === Name ===

    /// Change the display name. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn rename(&self, deck: &DeckAggregate, name: &str) -> DeckAggregate {
        let mut next = deck.clone();
        next.set_name(name.trim().to_string());
        next
    }

    // === Legend & champion ===

    /// Set the legend.
    ///
    /// If a champion is set and no longer shares a subtype with the new
    /// legend, the champion is cleared.
    pub fn set_legend(&self, deck: &DeckAggregate, card: &CardId) -> DeckResult<DeckAggregate> {
        let legend = self.resolve(deck, card)?;
        if legend.card_type != CardType::Legend {
            return Err(reject(deck, invalid_type(&legend, "a legend")));
        }

        let mut next = deck.clone();
        if let Some(champion_id) = deck.champion() {
            let champion = self.resolve(deck, champion_id)?;
            if !is_compatible(&legend, &champion) {
                debug!(
                    deck_id = %deck.id(),
                    legend = %legend.id,
                    champion = %champion.id,
                    "champion cleared by incompatible legend"
                );
                next.set_champion(None);
            }
        }
        next.set_legend(Some(legend.id));
        Ok(next)
    }

    /// Set the champion. Requires a legend sharing a subtype with it.
    pub fn set_champion(&self, deck: &DeckAggregate, card: &CardId) -> DeckResult<DeckAggregate> {
        let Some(legend_id) = deck.legend() else {
            return Err(reject(deck, DeckError::MissingPrerequisite));
        };

        let champion = self.resolve(deck, card)?;
        if champion.card_type != CardType::Champion {
            return Err(reject(deck, invalid_type(&champion, "a champion")));
        }

        let legend = self.resolve(deck, legend_id)?;
        if !is_compatible(&legend, &champion) {
            return Err(reject(
                deck,
                DeckError::IncompatibleChampion {
                    legend: legend.id,
                    champion: champion.id,
                },
            ));
        }

        let mut next = deck.clone();
        next.set_champion(Some(champion.id));
        Ok(next)
    }

    // === Battlefields ===

    /// Fill or clear a battlefield slot (1-3). `None` clears the slot.
    ///
    /// The same battlefield may occupy several slots.
    pub fn set_battlefield(
        &self,
        deck: &DeckAggregate,
        position: u8,
        card: Option<&CardId>,
    ) -> DeckResult<DeckAggregate> {
        let position = BattlefieldPosition::new(position).map_err(|e| reject(deck, e))?;

        let mut next = deck.clone();
        match card {
            Some(card) => {
                let battlefield = self.resolve(deck, card)?;
                if battlefield.card_type != CardType::Battlefield {
                    return Err(reject(deck, invalid_type(&battlefield, "a battlefield")));
                }
                next.set_battlefield(position, Some(battlefield.id));
            }
            None => next.set_battlefield(position, None),
        }
        Ok(next)
    }

    // === Main deck ===

    /// Add `delta` copies of a card to the main deck.
    pub fn add_main_card(
        &self,
        deck: &DeckAggregate,
        card: &CardId,
        delta: u32,
    ) -> DeckResult<DeckAggregate> {
        self.add_card(Section::Main, deck, card, delta)
    }

    /// Set the main-deck quantity of a card; 0 removes it.
    pub fn set_main_card_quantity(
        &self,
        deck: &DeckAggregate,
        card: &CardId,
        quantity: u32,
    ) -> DeckResult<DeckAggregate> {
        self.set_card_quantity(Section::Main, deck, card, quantity)
    }

    /// Remove a card from the main deck. Absent cards are a no-op.
    #[must_use]
    pub fn remove_main_card(&self, deck: &DeckAggregate, card: &CardId) -> DeckAggregate {
        remove_card(Section::Main, deck, card)
    }

    // === Rune deck ===

    /// Add `delta` copies of a rune to the rune deck.
    pub fn add_rune_card(
        &self,
        deck: &DeckAggregate,
        card: &CardId,
        delta: u32,
    ) -> DeckResult<DeckAggregate> {
        self.add_card(Section::Rune, deck, card, delta)
    }

    /// Set the rune-deck quantity of a rune; 0 removes it.
    pub fn set_rune_card_quantity(
        &self,
        deck: &DeckAggregate,
        card: &CardId,
        quantity: u32,
    ) -> DeckResult<DeckAggregate> {
        self.set_card_quantity(Section::Rune, deck, card, quantity)
    }

    /// Remove a rune from the rune deck. Absent runes are a no-op.
    #[must_use]
    pub fn remove_rune_card(&self, deck: &DeckAggregate, card: &CardId) -> DeckAggregate {
        remove_card(Section::Rune, deck, card)
    }

    // === Limits ===

    /// Maximum copies of a card in a section.
    ///
    /// Cards tagged "Unique" are capped at `unique_copy_limit` while
    /// `enforce_unique_limit` is on.
    #[must_use]
    pub fn copy_limit(&self, section: Section, card: &CardDefinition) -> u32 {
        copy_limit(&self.config, section, card)
    }

    // === Internals ===

    fn add_card(
        &self,
        section: Section,
        deck: &DeckAggregate,
        card: &CardId,
        delta: u32,
    ) -> DeckResult<DeckAggregate> {
        let definition = self.resolve_for_section(section, deck, card)?;
        if delta == 0 {
            return Ok(deck.clone());
        }

        let copies = deck.quantity(section, &definition.id).saturating_add(delta);
        let requested_total = deck.total(section).saturating_add(u64::from(delta));
        self.check_section_total(section, deck, requested_total)?;
        self.check_copy_limit(section, deck, &definition, copies)?;

        let mut next = deck.clone();
        next.set_quantity(section, definition.id, copies);
        Ok(next)
    }

    /// Unlike `add_card`, the per-card limit is checked before the
    /// section total: an over-limit quantity is a copy error on any deck.
    fn set_card_quantity(
        &self,
        section: Section,
        deck: &DeckAggregate,
        card: &CardId,
        quantity: u32,
    ) -> DeckResult<DeckAggregate> {
        if quantity == 0 {
            return Ok(remove_card(section, deck, card));
        }

        let definition = self.resolve_for_section(section, deck, card)?;
        self.check_copy_limit(section, deck, &definition, quantity)?;

        let current = u64::from(deck.quantity(section, &definition.id));
        let requested_total = (deck.total(section) - current).saturating_add(u64::from(quantity));
        self.check_section_total(section, deck, requested_total)?;

        let mut next = deck.clone();
        next.set_quantity(section, definition.id, quantity);
        Ok(next)
    }

    fn check_section_total(
        &self,
        section: Section,
        deck: &DeckAggregate,
        requested: u64,
    ) -> DeckResult<()> {
        let limit = section_size(&self.config, section);
        if requested > u64::from(limit) {
            return Err(reject(
                deck,
                DeckError::SectionFull {
                    section,
                    requested,
                    limit,
                },
            ));
        }
        Ok(())
    }

    fn check_copy_limit(
        &self,
        section: Section,
        deck: &DeckAggregate,
        card: &CardDefinition,
        requested: u32,
    ) -> DeckResult<()> {
        let limit = self.copy_limit(section, card);
        if requested > limit {
            return Err(reject(
                deck,
                DeckError::CopyLimitExceeded {
                    section,
                    card: card.id.clone(),
                    requested,
                    limit,
                },
            ));
        }
        Ok(())
    }

    fn resolve_for_section(
        &self,
        section: Section,
        deck: &DeckAggregate,
        card: &CardId,
    ) -> DeckResult<CardDefinition> {
        let definition = self.resolve(deck, card)?;
        let (accepted, expected) = match section {
            Section::Main => (definition.card_type.is_main_deck(), "a main deck card"),
            Section::Rune => (definition.card_type == CardType::Rune, "a rune"),
        };
        if accepted {
            Ok(definition)
        } else {
            Err(reject(deck, invalid_type(&definition, expected)))
        }
    }

    fn resolve(&self, deck: &DeckAggregate, card: &CardId) -> DeckResult<CardDefinition> {
        self.catalog.lookup(card).map_err(|e| reject(deck, e))
    }
}

/// Maximum copies of a card in a section under `config`.
pub(crate) fn copy_limit(config: &DeckConfig, section: Section, card: &CardDefinition) -> u32 {
    let base = match section {
        Section::Main => config.main_copy_limit,
        Section::Rune => config.rune_copy_limit,
    };
    if config.enforce_unique_limit && card.is_unique() {
        base.min(config.unique_copy_limit)
    } else {
        base
    }
}

/// Required (and maximum) card count of a section.
pub(crate) fn section_size(config: &DeckConfig, section: Section) -> u32 {
    match section {
        Section::Main => config.main_deck_size,
        Section::Rune => config.rune_deck_size,
    }
}

fn remove_card(section: Section, deck: &DeckAggregate, card: &CardId) -> DeckAggregate {
    let mut next = deck.clone();
    next.set_quantity(section, card.clone(), 0);
    next
}

fn invalid_type(card: &CardDefinition, expected: &'static str) -> DeckError {
    DeckError::InvalidCardType {
        card: card.id.clone(),
        actual: card.card_type,
        expected,
    }
}

fn reject(deck: &DeckAggregate, error: DeckError) -> DeckError {
    debug!(deck_id = %deck.id(), kind = %error.kind(), %error, "deck mutation rejected");
    error
}
