//! # rift-deck
//!
//! Deck composition rules and validation for a trading-card deck builder.
//!
//! A deck has one Legend, one Champion that shares a subtype with the
//! Legend, three Battlefields, a 40-card Main deck (at most 3 copies per
//! card, 1 for "Unique" cards) and a 12-card Rune deck (1 copy per rune).
//!
//! ## Design Principles
//!
//! 1. **Values In, Values Out**: Every rule-engine operation takes a deck
//!    by reference and returns a new deck or one error. Decks use `im`
//!    maps, so these copies are cheap.
//!
//! 2. **Collaborators Behind Traits**: Card lookup (`CardCatalog`) and
//!    storage (`DeckRepository`) are injected; the core does no I/O.
//!
//! 3. **Configuration Over Convention**: Section sizes and copy limits
//!    live in `DeckConfig`.
//!
//! ## Modules
//!
//! - `core`: Identifiers and `DeckConfig`
//! - `cards`: Card definitions and the catalog contract
//! - `deck`: The deck aggregate and build-step accessor
//! - `rules`: The composition rule engine
//! - `validation`: Validation reports
//! - `store`: Repository contract and in-memory implementation
//! - `service`: By-ID operations over a repository

pub mod core;
pub mod cards;
pub mod deck;
pub mod error;
pub mod rules;
pub mod validation;
pub mod store;
pub mod service;

// Re-export commonly used types
pub use crate::core::{CardId, DeckConfig, DeckId, OwnerId, BATTLEFIELD_SLOTS};

pub use crate::cards::{
    CardAttributes, CardCatalog, CardDefinition, CardRegistry, CardType, Domain,
};

pub use crate::deck::{
    next_incomplete_step, BattlefieldPosition, BuildStep, DeckAggregate, LineItem, Section,
};

pub use crate::error::{DeckError, DeckResult, ErrorKind};

pub use crate::rules::{is_compatible, CompositionEngine};

pub use crate::validation::{DeckValidationReport, Validator};

pub use crate::store::{DeckRepository, InMemoryDeckRepository};

pub use crate::service::{CreateDeckOptions, DeckService, DeckView, GetDeckOptions};
