//! Card catalog data: definitions, attribute tags and lookup.
//!
//! ## Key Types
//!
//! - `CardType`: Which deck section a card belongs to
//! - `Domain`: Thematic tag (fury, calm, mind, ...)
//! - `CardDefinition`: Read-only catalog entry
//! - `CardCatalog`: Lookup contract consumed by the rule engine
//! - `CardRegistry`: In-memory `CardCatalog`

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{CardAttributes, UNIQUE_TAG};
pub use definition::{CardDefinition, CardType, Domain};
pub use registry::{CardCatalog, CardRegistry};
