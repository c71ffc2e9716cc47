//! Deck construction limits.
//!
//! `DeckConfig` holds the section sizes and copy limits that the rule
//! engine and validator enforce, plus switches for the advisory warnings.
//! The defaults are the standard constructed format.

use serde::{Deserialize, Serialize};

/// Number of battlefield slots in every deck.
pub const BATTLEFIELD_SLOTS: usize = 3;

/// Deck construction limits and validator switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Exact number of cards the main deck must hold (and may not exceed).
    pub main_deck_size: u32,

    /// Exact number of cards the rune deck must hold (and may not exceed).
    pub rune_deck_size: u32,

    /// Copies of one card allowed in the main deck.
    pub main_copy_limit: u32,

    /// Copies of one rune allowed in the rune deck.
    pub rune_copy_limit: u32,

    /// Copies allowed for cards tagged "Unique".
    pub unique_copy_limit: u32,

    /// Apply `unique_copy_limit` to cards tagged "Unique".
    /// When off, unique cards fall back to `main_copy_limit`.
    pub enforce_unique_limit: bool,

    /// Warn about cards whose domains are outside the legend's domains.
    pub warn_off_domain: bool,

    /// Warn when one battlefield occupies more than one slot.
    pub warn_duplicate_battlefields: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            main_deck_size: 40,
            rune_deck_size: 12,
            main_copy_limit: 3,
            rune_copy_limit: 1,
            unique_copy_limit: 1,
            enforce_unique_limit: true,
            warn_off_domain: true,
            warn_duplicate_battlefields: true,
        }
    }
}

impl DeckConfig {
    /// Set the main deck size.
    #[must_use]
    pub fn with_main_deck_size(mut self, size: u32) -> Self {
        self.main_deck_size = size;
        self
    }

    /// Set the rune deck size.
    #[must_use]
    pub fn with_rune_deck_size(mut self, size: u32) -> Self {
        self.rune_deck_size = size;
        self
    }

    /// Set the main deck copy limit.
    #[must_use]
    pub fn with_main_copy_limit(mut self, limit: u32) -> Self {
        self.main_copy_limit = limit;
        self
    }

    /// Enable or disable the unique-card cap.
    #[must_use]
    pub fn with_unique_limit(mut self, enforce: bool) -> Self {
        self.enforce_unique_limit = enforce;
        self
    }

    /// Disable all advisory warnings.
    #[must_use]
    pub fn without_warnings(mut self) -> Self {
        self.warn_off_domain = false;
        self.warn_duplicate_battlefields = false;
        self
    }
}
