//! Card catalog for kind lookup.
//!
//! The `CardCatalog` stores every kind available to a game. Kinds are
//! registered once at setup and never change; lookups go by `KindId` (dense,
//! O(1)) or by exact name.

use rustc_hash::FxHashMap;

use super::definition::{CardCategory, CardKind, KindId};
use crate::core::error::SetupError;

pub const COPPER: &str = "Copper";
pub const SILVER: &str = "Silver";
pub const GOLD: &str = "Gold";
pub const ESTATE: &str = "Estate";
pub const DUCHY: &str = "Duchy";
pub const PROVINCE: &str = "Province";
pub const CURSE: &str = "Curse";
pub const GARDENS: &str = "Gardens";

/// The seven kinds every supply contains, in supply order.
pub const BASIC_CARDS: [&str; 7] = [COPPER, SILVER, GOLD, ESTATE, DUCHY, PROVINCE, CURSE];

/// Registry of card kinds.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardCatalog, CardCategory, CardKind};
///
/// let mut catalog = CardCatalog::new();
/// let id = catalog.register(CardKind::new("Village", CardCategory::Action, 3).with_actions(2));
///
/// assert_eq!(catalog.kind(id).name, "Village");
/// assert_eq!(catalog.find("Village").map(|k| k.id), Some(id));
/// assert!(catalog.find("village").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    kinds: Vec<CardKind>,
    by_name: FxHashMap<String, KindId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of kinds, rejecting duplicate names.
    pub fn from_kinds(kinds: impl IntoIterator<Item = CardKind>) -> Result<Self, SetupError> {
        let mut catalog = Self::new();
        for kind in kinds {
            if catalog.by_name.contains_key(&kind.name) {
                return Err(SetupError::DuplicateCard(kind.name));
            }
            catalog.register(kind);
        }
        Ok(catalog)
    }

    /// Register a kind and return its assigned id.
    ///
    /// Panics if a kind with the same name already exists.
    pub fn register(&mut self, mut kind: CardKind) -> KindId {
        if self.by_name.contains_key(&kind.name) {
            panic!("Card {:?} already registered", kind.name);
        }

        let id = KindId::new(self.kinds.len() as u16);
        kind.id = id;
        self.by_name.insert(kind.name.clone(), id);
        self.kinds.push(kind);
        id
    }

    /// Get a kind by id.
    #[must_use]
    pub fn get(&self, id: KindId) -> Option<&CardKind> {
        self.kinds.get(id.index())
    }

    /// Get a kind by id, panicking if it belongs to another catalog.
    ///
    /// Use for ids this catalog handed out.
    #[must_use]
    pub fn kind(&self, id: KindId) -> &CardKind {
        self.kinds
            .get(id.index())
            .expect("KindId not issued by this catalog")
    }

    /// Find a kind by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CardKind> {
        self.by_name.get(name).map(|&id| &self.kinds[id.index()])
    }

    /// Find a basic kind, failing setup if the catalog lacks it.
    pub fn require(&self, name: &'static str) -> Result<&CardKind, SetupError> {
        self.find(name).ok_or(SetupError::MissingBasicCard(name))
    }

    /// Is this one of the seven basic supply kinds?
    #[must_use]
    pub fn is_basic(name: &str) -> bool {
        BASIC_CARDS.contains(&name)
    }

    /// Get the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardKind> {
        self.kinds.iter()
    }

    /// Kinds eligible for random kingdom selection: non-basic action kinds,
    /// in registration order.
    pub fn kingdom_candidates(&self) -> impl Iterator<Item = &CardKind> {
        self.kinds
            .iter()
            .filter(|k| k.is_action() && !Self::is_basic(&k.name))
    }

    /// The basic cards plus the base-set kingdom.
    ///
    /// Only the on-play magnitudes are modelled; cards whose text does more
    /// (Chapel, Workshop, ...) play as their magnitudes alone.
    #[must_use]
    pub fn base_set() -> Self {
        use CardCategory::*;

        let kinds = [
            CardKind::new(COPPER, Treasure, 0).with_coins(1),
            CardKind::new(SILVER, Treasure, 3).with_coins(2),
            CardKind::new(GOLD, Treasure, 6).with_coins(3),
            CardKind::new(ESTATE, Victory, 2).with_vp(1),
            CardKind::new(DUCHY, Victory, 5).with_vp(3),
            CardKind::new(PROVINCE, Victory, 8).with_vp(6),
            CardKind::new(CURSE, Curse, 0).with_vp(-1),
            CardKind::new(GARDENS, Victory, 4),
            CardKind::new("Cellar", Action, 2).with_actions(1),
            CardKind::new("Chapel", Action, 2),
            CardKind::new("Moat", ActionReaction, 2).with_cards(2),
            CardKind::new("Harbinger", Action, 3).with_cards(1).with_actions(1),
            CardKind::new("Merchant", Action, 3).with_cards(1).with_actions(1),
            CardKind::new("Vassal", Action, 3).with_coins(2),
            CardKind::new("Village", Action, 3).with_cards(1).with_actions(2),
            CardKind::new("Workshop", Action, 3),
            CardKind::new("Bureaucrat", ActionAttack, 4),
            CardKind::new("Militia", ActionAttack, 4).with_coins(2),
            CardKind::new("Moneylender", Action, 4),
            CardKind::new("Poacher", Action, 4).with_cards(1).with_actions(1).with_coins(1),
            CardKind::new("Remodel", Action, 4),
            CardKind::new("Smithy", Action, 4).with_cards(3),
            CardKind::new("Throne Room", Action, 4),
            CardKind::new("Bandit", ActionAttack, 5),
            CardKind::new("Council Room", Action, 5).with_cards(4).with_buys(1),
            CardKind::new("Festival", Action, 5).with_actions(2).with_buys(1).with_coins(2),
            CardKind::new("Laboratory", Action, 5).with_cards(2).with_actions(1),
            CardKind::new("Library", Action, 5),
            CardKind::new("Market", Action, 5)
                .with_cards(1)
                .with_actions(1)
                .with_buys(1)
                .with_coins(1),
            CardKind::new("Mine", Action, 5),
            CardKind::new("Sentry", Action, 5).with_cards(1).with_actions(1),
            CardKind::new("Witch", ActionAttack, 5).with_cards(2),
            CardKind::new("Artisan", Action, 6),
        ];

        let mut catalog = Self::new();
        for kind in kinds {
            catalog.register(kind);
        }
        catalog
    }
}
