//! Core types: identifiers and deck construction limits.
//!
//! Nothing here knows about rules; the engine and validator read
//! `DeckConfig` to decide what is legal.

pub mod config;
pub mod ids;

pub use config::{DeckConfig, BATTLEFIELD_SLOTS};
pub use ids::{CardId, DeckId, OwnerId};
