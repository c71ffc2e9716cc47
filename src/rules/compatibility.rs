//! Legend/champion pairing.

use crate::cards::CardDefinition;

/// A champion fits a legend when the two share at least one subtype.
///
/// Subtypes are compared ignoring ASCII case. Cards without subtypes
/// are never compatible.
#[must_use]
pub fn is_compatible(legend: &CardDefinition, champion: &CardDefinition) -> bool {
    legend
        .subtypes
        .iter()
        .any(|subtype| champion.has_subtype(subtype))
}
