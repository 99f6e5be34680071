//! Card instance identification.
//!
//! Every physical card in a game has a unique `InstanceId`. Ids are handed
//! out by a single `InstanceIds` allocator owned by the game, so two copies of
//! the same kind are always distinguishable while they move between zones.
//!
//! ## Usage
//!
//! ```
//! use rust_dominion::core::InstanceIds;
//!
//! let mut ids = InstanceIds::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for `InstanceId`s.
///
/// Instances are only ever created at setup (starting decks) and when a card
/// is bought, and both paths go through this allocator. The count of
/// allocated ids is therefore the number of cards that exist outside the
/// supply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIds {
    next: u32,
}

impl InstanceIds {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids allocated so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = InstanceIds::new();

        assert_eq!(ids.alloc(), InstanceId(0));
        assert_eq!(ids.alloc(), InstanceId(1));
        assert_eq!(ids.alloc(), InstanceId(2));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(7)), "#7");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(42);
        let json = serde_json::to_string(&id).unwrap();
        let back: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
