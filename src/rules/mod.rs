//! Deck composition rules.
//!
//! `CompositionEngine` applies mutations to a `DeckAggregate` after
//! checking them against the card catalog and `DeckConfig`:
//! - Section membership by card type
//! - Section totals (main 40, rune 12)
//! - Per-card copy limits (3 main, 1 rune, 1 for "Unique" cards)
//! - Legend/champion compatibility

pub mod compatibility;
pub mod engine;

pub use compatibility::is_compatible;
pub use engine::CompositionEngine;
pub(crate) use engine::{copy_limit, section_size};
