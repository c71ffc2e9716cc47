//! Card definitions - read-only catalog data.
//!
//! A `CardDefinition` carries what the deck rules need to know about a
//! card: its type (which section it belongs to), its domains and its
//! subtypes (legend/champion compatibility), plus a few display stats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::CardAttributes;
use crate::core::CardId;

/// Card type as reported by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Legend,
    Champion,
    Unit,
    Gear,
    Spell,
    Rune,
    Battlefield,
    Other,
}

impl CardType {
    /// Parse a catalog type string. Unknown types map to `Other`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "legend" => CardType::Legend,
            "champion" => CardType::Champion,
            "unit" => CardType::Unit,
            "gear" => CardType::Gear,
            "spell" => CardType::Spell,
            "rune" => CardType::Rune,
            "battlefield" => CardType::Battlefield,
            _ => CardType::Other,
        }
    }

    /// Whether cards of this type go in the main deck.
    #[must_use]
    pub const fn is_main_deck(self) -> bool {
        !matches!(
            self,
            CardType::Legend | CardType::Champion | CardType::Rune | CardType::Battlefield
        )
    }

    /// Lowercase name, as used in card data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Legend => "legend",
            CardType::Champion => "champion",
            CardType::Unit => "unit",
            CardType::Gear => "gear",
            CardType::Spell => "spell",
            CardType::Rune => "rune",
            CardType::Battlefield => "battlefield",
            CardType::Other => "other",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thematic domain tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Fury,
    Calm,
    Mind,
    Body,
    Chaos,
    Order,
    Colorless,
}

impl Domain {
    /// Lowercase domain name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Domain::Fury => "fury",
            Domain::Calm => "calm",
            Domain::Mind => "mind",
            Domain::Body => "body",
            Domain::Chaos => "chaos",
            Domain::Order => "order",
            Domain::Colorless => "colorless",
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fury" => Ok(Domain::Fury),
            "calm" => Ok(Domain::Calm),
            "mind" => Ok(Domain::Mind),
            "body" => Ok(Domain::Body),
            "chaos" => Ok(Domain::Chaos),
            "order" => Ok(Domain::Order),
            "colorless" => Ok(Domain::Colorless),
            other => Err(format!("unknown domain: {other}")),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card definition from the catalog.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardDefinition, CardType, Domain};
///
/// let jinx = CardDefinition::new("OGN-251", "Jinx, Loose Cannon", CardType::Legend)
///     .with_domain(Domain::Fury)
///     .with_domain(Domain::Chaos)
///     .with_subtype("Jinx");
///
/// assert!(jinx.has_domain(Domain::Chaos));
/// assert!(!jinx.is_unique());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Most cards have one or two domains.
    pub domains: SmallVec<[Domain; 2]>,

    /// Subtype tags; a champion fits a legend when they share one.
    pub subtypes: SmallVec<[String; 2]>,

    pub attributes: CardAttributes,

    pub energy: Option<u32>,
    pub might: Option<u32>,
    pub power: Option<u32>,
}

impl CardDefinition {
    /// Create a card definition with no domains, subtypes or stats.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            domains: SmallVec::new(),
            subtypes: SmallVec::new(),
            attributes: CardAttributes::default(),
            energy: None,
            might: None,
            power: None,
        }
    }

    /// Add a domain (builder pattern).
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        if !self.domains.contains(&domain) {
            self.domains.push(domain);
        }
        self
    }

    /// Add a subtype (builder pattern).
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtypes.push(subtype.into());
        self
    }

    /// Add an attribute tag (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, tag: impl AsRef<str>) -> Self {
        self.attributes.insert(tag);
        self
    }

    #[must_use]
    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = Some(energy);
        self
    }

    #[must_use]
    pub fn with_might(mut self, might: u32) -> Self {
        self.might = Some(might);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    /// Whether this card has a subtype, ignoring ASCII case.
    #[must_use]
    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.subtypes.iter().any(|s| s.eq_ignore_ascii_case(subtype))
    }

    /// Whether the card carries the "Unique" attribute tag.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.attributes.is_unique()
    }
}
