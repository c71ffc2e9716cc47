//! Deck aggregate and derived accessors.
//!
//! ## Key Types
//!
//! - `DeckAggregate`: Legend, champion, battlefields, main and rune sections
//! - `LineItem`: A card and its quantity within a section
//! - `BattlefieldPosition`: Slot number 1-3
//! - `BuildStep`: Next thing a deck still needs

pub mod aggregate;
pub mod step;

pub use aggregate::{BattlefieldPosition, DeckAggregate, LineItem, Section, DEFAULT_DECK_NAME};
pub use step::{next_incomplete_step, BuildStep};
