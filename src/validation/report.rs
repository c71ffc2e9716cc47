//! Validation report.

use serde::{Deserialize, Serialize};

/// Outcome of validating a deck.
///
/// `valid` is true exactly when `errors` is empty; warnings are advisory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckValidationReport {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl DeckValidationReport {
    /// Build a report; validity is derived from `errors`.
    #[must_use]
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether a specific error message was reported.
    #[must_use]
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e == message)
    }
}
