//! Deck validator.
//!
//! Runs every rule against a deck and collects all violations. The
//! validator never fails: cards the catalog cannot resolve are reported
//! as errors in the report. Limits already enforced by the rule engine
//! are checked again here, since a deck may come from storage.

use rustc_hash::FxHashMap;

use super::report::DeckValidationReport;
use crate::cards::{CardCatalog, CardDefinition, CardType, Domain};
use crate::core::{CardId, DeckConfig, BATTLEFIELD_SLOTS};
use crate::deck::{BattlefieldPosition, DeckAggregate, Section};
use crate::rules::{copy_limit, is_compatible, section_size};

/// Produces a `DeckValidationReport` for a deck.
#[derive(Clone, Debug)]
pub struct Validator<C> {
    catalog: C,
    config: DeckConfig,
}

impl<C: CardCatalog> Validator<C> {
    /// Create a validator with the default limits.
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, DeckConfig::default())
    }

    /// Create a validator with custom limits and advisory switches.
    pub fn with_config(catalog: C, config: DeckConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Validate a deck of any completeness.
    #[must_use]
    pub fn validate(&self, deck: &DeckAggregate) -> DeckValidationReport {
        let mut pass = Pass {
            catalog: &self.catalog,
            resolved: FxHashMap::default(),
            errors: Vec::new(),
            warnings: Vec::new(),
        };

        let legend = self.check_legend_and_champion(deck, &mut pass);
        self.check_battlefields(deck, &mut pass);
        self.check_section(deck, Section::Main, &mut pass);
        self.check_section(deck, Section::Rune, &mut pass);

        if self.config.warn_off_domain {
            if let Some(legend) = &legend {
                warn_off_domain(deck, legend, &mut pass);
            }
        }
        if self.config.warn_duplicate_battlefields {
            warn_duplicate_battlefields(deck, &mut pass);
        }

        DeckValidationReport::new(pass.errors, pass.warnings)
    }

    /// Returns the resolved legend for the domain advisory.
    fn check_legend_and_champion(
        &self,
        deck: &DeckAggregate,
        pass: &mut Pass<'_, C>,
    ) -> Option<CardDefinition> {
        let legend = match deck.legend() {
            None => {
                pass.error("Legend is required.".to_string());
                None
            }
            Some(id) => pass.resolve(id).filter(|legend| {
                let ok = legend.card_type == CardType::Legend;
                if !ok {
                    pass.error(format!("{} is not a legend.", legend.name));
                }
                ok
            }),
        };

        let champion = match deck.champion() {
            None => {
                pass.error("Champion is required.".to_string());
                None
            }
            Some(id) => pass.resolve(id).filter(|champion| {
                let ok = champion.card_type == CardType::Champion;
                if !ok {
                    pass.error(format!("{} is not a champion.", champion.name));
                }
                ok
            }),
        };

        if let (Some(legend), Some(champion)) = (&legend, &champion) {
            if !is_compatible(legend, champion) {
                pass.error(format!(
                    "Champion {} is not compatible with legend {}.",
                    champion.name, legend.name
                ));
            }
        }

        legend
    }

    fn check_battlefields(&self, deck: &DeckAggregate, pass: &mut Pass<'_, C>) {
        if deck.battlefield_count() < BATTLEFIELD_SLOTS {
            pass.error("All three battlefields must be set.".to_string());
        }

        for position in BattlefieldPosition::all() {
            let Some(id) = deck.battlefield(position) else {
                continue;
            };
            if let Some(card) = pass.resolve(id) {
                if card.card_type != CardType::Battlefield {
                    pass.error(format!(
                        "{} in battlefield slot {} is not a battlefield.",
                        card.name, position
                    ));
                }
            }
        }
    }

    fn check_section(&self, deck: &DeckAggregate, section: Section, pass: &mut Pass<'_, C>) {
        let label = match section {
            Section::Main => "Main",
            Section::Rune => "Rune",
        };
        let size = section_size(&self.config, section);

        let total = deck.total(section);
        if total != u64::from(size) {
            pass.error(format!(
                "{label} deck must have exactly {size} cards (currently {total})."
            ));
        }

        for item in deck.items(section) {
            let Some(card) = pass.resolve(&item.card) else {
                continue;
            };

            let belongs = match section {
                Section::Main => card.card_type.is_main_deck(),
                Section::Rune => card.card_type == CardType::Rune,
            };
            if !belongs {
                pass.error(match section {
                    Section::Main => format!("{} cannot be placed in the main deck.", card.name),
                    Section::Rune => format!("{} is not a rune.", card.name),
                });
            }

            let limit = copy_limit(&self.config, section, &card);
            if item.quantity > limit {
                pass.error(format!(
                    "{label} deck has {} copies of {} (maximum {limit}).",
                    item.quantity, card.name
                ));
            }
        }
    }
}

/// State for one `validate` call.
struct Pass<'a, C> {
    catalog: &'a C,
    /// `None` marks a card already reported as missing.
    resolved: FxHashMap<CardId, Option<CardDefinition>>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl<C: CardCatalog> Pass<'_, C> {
    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Look a card up once per pass; a miss is reported once.
    fn resolve(&mut self, id: &CardId) -> Option<CardDefinition> {
        if let Some(cached) = self.resolved.get(id) {
            return cached.clone();
        }
        let found = self.catalog.lookup(id).ok();
        if found.is_none() {
            self.error(format!("Card {id} was not found in the catalog."));
        }
        self.resolved.insert(id.clone(), found.clone());
        found
    }
}

fn warn_off_domain<C: CardCatalog>(
    deck: &DeckAggregate,
    legend: &CardDefinition,
    pass: &mut Pass<'_, C>,
) {
    let legend_domains: Vec<Domain> = legend
        .domains
        .iter()
        .copied()
        .filter(|&d| d != Domain::Colorless)
        .collect();
    if legend_domains.is_empty() {
        return;
    }
    let listed = legend_domains
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let items: Vec<CardId> = deck
        .main_items()
        .chain(deck.rune_items())
        .map(|item| item.card)
        .collect();
    for id in items {
        let Some(card) = pass.resolve(&id) else {
            continue;
        };
        let mut colored = card.domains.iter().filter(|&&d| d != Domain::Colorless).peekable();
        if colored.peek().is_none() {
            continue;
        }
        if !colored.any(|d| legend_domains.contains(d)) {
            pass.warning(format!(
                "{} is outside the legend's domains ({listed}).",
                card.name
            ));
        }
    }
}

fn warn_duplicate_battlefields<C: CardCatalog>(deck: &DeckAggregate, pass: &mut Pass<'_, C>) {
    let slots = deck.battlefields();
    for (i, slot) in slots.iter().enumerate() {
        let Some(id) = slot else {
            continue;
        };
        let first_occurrence = !slots[..i].iter().any(|s| s.as_ref() == Some(id));
        let repeated = slots[i + 1..].iter().any(|s| s.as_ref() == Some(id));
        if first_occurrence && repeated {
            let name = pass.resolve(id).map_or_else(|| id.to_string(), |c| c.name);
            pass.warning(format!("Battlefield {name} is used in more than one slot."));
        }
    }
}
