//! Card system: kinds, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `KindId`: Identifier for a catalog entry
//! - `CardCategory`: Treasure, Victory, the three Action categories, Curse
//! - `CardKind`: Static card data (cost, effect magnitudes, victory points)
//! - `CardInstance`: One physical copy, tracked by zone
//! - `CardCatalog`: Kind lookup, plus the base set

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{CardCatalog, BASIC_CARDS, COPPER, CURSE, DUCHY, ESTATE, GARDENS, GOLD, PROVINCE, SILVER};
pub use definition::{CardCategory, CardEffects, CardKind, KindId};
pub use instance::{CardInstance, Zone};
