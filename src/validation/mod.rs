//! Deck validation.
//!
//! `Validator` derives a `DeckValidationReport` from a deck: blocking
//! errors (missing legend, wrong section sizes, copy limits, ...) and
//! non-blocking warnings. Reports hold no state and can be recomputed
//! after every mutation.

pub mod report;
pub mod validator;

pub use report::DeckValidationReport;
pub use validator::Validator;
