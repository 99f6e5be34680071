//! Card instances - physical copies of a kind.
//!
//! Instances of one kind are interchangeable for rules purposes, but each has
//! its own `InstanceId` and records where it currently sits, so a specific
//! copy can be followed as it moves deck -> hand -> discard -> deck.

use serde::{Deserialize, Serialize};

use super::definition::KindId;
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

/// One of a player's three zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Discard => "discard",
        })
    }
}

/// A card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id of this copy.
    pub id: InstanceId,

    /// The catalog entry this is a copy of.
    pub kind: KindId,

    /// The player holding this copy.
    pub owner: PlayerId,

    /// Current zone. Kept in sync by `PlayerZones`.
    pub zone: Zone,
}

impl CardInstance {
    /// Create an instance in the given zone.
    #[must_use]
    pub fn new(id: InstanceId, kind: KindId, owner: PlayerId, zone: Zone) -> Self {
        Self {
            id,
            kind,
            owner,
            zone,
        }
    }

    /// Is this a copy of `kind`?
    #[must_use]
    pub fn is(&self, kind: KindId) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_new() {
        let card = CardInstance::new(InstanceId(3), KindId::new(1), PlayerId::new(0), Zone::Deck);

        assert_eq!(card.id, InstanceId(3));
        assert!(card.is(KindId::new(1)));
        assert!(!card.is(KindId::new(2)));
        assert_eq!(card.zone, Zone::Deck);
    }

    #[test]
    fn test_copies_are_distinct() {
        let a = CardInstance::new(InstanceId(1), KindId::new(0), PlayerId::new(0), Zone::Hand);
        let b = CardInstance::new(InstanceId(2), KindId::new(0), PlayerId::new(0), Zone::Hand);

        assert_ne!(a, b);
        assert_eq!(a.kind, b.kind);
    }

    #[test]
    fn test_serialization() {
        let card = CardInstance::new(InstanceId(9), KindId::new(4), PlayerId::new(1), Zone::Discard);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
