//! Error types for deck composition and persistence.
//!
//! Every failure carries exactly one [`ErrorKind`]. Rule-engine failures
//! leave the deck untouched; `NotFound` and `Conflict` come from the
//! repository, `CardNotFound` from the card catalog.

use thiserror::Error;

use crate::cards::CardType;
use crate::core::{CardId, DeckId};
use crate::deck::Section;

/// Result alias used throughout the crate.
pub type DeckResult<T> = Result<T, DeckError>;

/// Kind tag for a [`DeckError`].
///
/// Stable across releases; callers render these as inline messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCardType,
    MissingPrerequisite,
    IncompatibleChampion,
    InvalidPosition,
    SectionFull,
    CopyLimitExceeded,
    CardNotFound,
    NotFound,
    Conflict,
}

impl ErrorKind {
    /// Default human-readable message for this kind.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorKind::InvalidCardType => "This card cannot be placed in that part of the deck.",
            ErrorKind::MissingPrerequisite => "Set a legend before choosing a champion.",
            ErrorKind::IncompatibleChampion => "This champion does not match the deck's legend.",
            ErrorKind::InvalidPosition => "Battlefield position must be 1, 2 or 3.",
            ErrorKind::SectionFull => "This section of the deck is full.",
            ErrorKind::CopyLimitExceeded => "Too many copies of this card.",
            ErrorKind::CardNotFound => "Card not found.",
            ErrorKind::NotFound => "Deck not found.",
            ErrorKind::Conflict => "The deck was changed by another request.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A rejected deck operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card {card} is a {actual} card and cannot be used as {expected}")]
    InvalidCardType {
        card: CardId,
        actual: CardType,
        expected: &'static str,
    },

    #[error("a legend must be set before a champion")]
    MissingPrerequisite,

    #[error("champion {champion} shares no subtype with legend {legend}")]
    IncompatibleChampion { legend: CardId, champion: CardId },

    #[error("battlefield position {0} is out of range (1-3)")]
    InvalidPosition(u8),

    #[error("{section} deck would hold {requested} cards (limit {limit})")]
    SectionFull {
        section: Section,
        requested: u64,
        limit: u32,
    },

    #[error("{section} deck would hold {requested} copies of {card} (limit {limit})")]
    CopyLimitExceeded {
        section: Section,
        card: CardId,
        requested: u32,
        limit: u32,
    },

    #[error("card {0} not found in catalog")]
    CardNotFound(CardId),

    #[error("deck {0} not found")]
    NotFound(DeckId),

    #[error("deck {deck} was modified concurrently (expected revision {expected}, found {found})")]
    Conflict {
        deck: DeckId,
        expected: u64,
        found: u64,
    },
}

impl DeckError {
    /// The kind tag of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidCardType { .. } => ErrorKind::InvalidCardType,
            DeckError::MissingPrerequisite => ErrorKind::MissingPrerequisite,
            DeckError::IncompatibleChampion { .. } => ErrorKind::IncompatibleChampion,
            DeckError::InvalidPosition(_) => ErrorKind::InvalidPosition,
            DeckError::SectionFull { .. } => ErrorKind::SectionFull,
            DeckError::CopyLimitExceeded { .. } => ErrorKind::CopyLimitExceeded,
            DeckError::CardNotFound(_) => ErrorKind::CardNotFound,
            DeckError::NotFound(_) => ErrorKind::NotFound,
            DeckError::Conflict { .. } => ErrorKind::Conflict,
        }
    }

    /// Default user-facing message for this error's kind.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        self.kind().default_message()
    }
}
