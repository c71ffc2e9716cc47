//! Card attribute tags.
//!
//! The catalog attaches free-form attribute tags to cards ("Unique",
//! "Signature", ...). Tags are compared case-insensitively; only
//! "Unique" has a rules meaning here (it lowers the copy limit).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Attribute tag that marks a card as unique-limited.
pub const UNIQUE_TAG: &str = "unique";

/// Set of attribute tags on a card, stored lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAttributes(FxHashSet<String>);

impl CardAttributes {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        self.0.insert(normalize(tag.as_ref()))
    }

    /// Check for a tag, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn has(&self, tag: &str) -> bool {
        self.0.contains(&normalize(tag))
    }

    /// Whether the card carries the "Unique" tag.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.0.contains(UNIQUE_TAG)
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the card has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over tags (lowercased, unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CardAttributes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for tag in iter {
            attrs.insert(tag);
        }
        attrs
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}
