//! Deck storage.
//!
//! - `DeckRepository`: load/save/create/delete contract
//! - `InMemoryDeckRepository`: hash-map implementation with revision checks

pub mod repository;

pub use repository::{DeckRepository, InMemoryDeckRepository};
