//! Supply piles.
//!
//! The supply maps each kind in the game to the number of copies still
//! purchasable. Counts only ever go down after setup, and `take` is the only
//! way to lower them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::KindId;

/// One supply pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub kind: KindId,
    pub name: String,
    pub initial: u32,
    pub remaining: u32,
}

impl Pile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

/// The shared supply.
///
/// Piles keep the order they were added in (basics first, then kingdom).
///
/// ```
/// use rust_dominion::cards::KindId;
/// use rust_dominion::supply::Supply;
///
/// let mut supply = Supply::new();
/// let village = KindId::new(3);
/// supply.add_pile(village, "Village", 1);
///
/// assert!(supply.take(village));
/// assert!(!supply.take(village));
/// assert_eq!(supply.count(village), Some(0));
/// assert_eq!(supply.empty_piles().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Supply {
    piles: Vec<Pile>,
    #[serde(skip)]
    index: FxHashMap<KindId, usize>,
}

impl Supply {
    /// Create an empty supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile at setup.
    ///
    /// Panics if the kind already has a pile.
    pub fn add_pile(&mut self, kind: KindId, name: impl Into<String>, count: u32) {
        if self.index.contains_key(&kind) {
            panic!("Supply already has a pile for {kind}");
        }
        self.index.insert(kind, self.piles.len());
        self.piles.push(Pile {
            kind,
            name: name.into(),
            initial: count,
            remaining: count,
        });
    }

    /// Remaining copies of `kind`, or `None` if the kind is not in this game.
    #[must_use]
    pub fn count(&self, kind: KindId) -> Option<u32> {
        self.pile(kind).map(|p| p.remaining)
    }

    /// Remaining copies by card name.
    #[must_use]
    pub fn count_by_name(&self, name: &str) -> Option<u32> {
        self.piles.iter().find(|p| p.name == name).map(|p| p.remaining)
    }

    /// The pile for `kind`.
    #[must_use]
    pub fn pile(&self, kind: KindId) -> Option<&Pile> {
        self.index.get(&kind).map(|&i| &self.piles[i])
    }

    /// Remove one copy. Returns false, changing nothing, if the pile is
    /// missing or empty.
    pub fn take(&mut self, kind: KindId) -> bool {
        match self.index.get(&kind) {
            Some(&i) if self.piles[i].remaining > 0 => {
                self.piles[i].remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// All piles in setup order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Piles with no copies left.
    pub fn empty_piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(|p| p.is_empty())
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Check if the supply has no piles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Set a pile's remaining count directly.
    ///
    /// Test fixtures only; play never raises a count.
    #[cfg(test)]
    pub(crate) fn set_remaining(&mut self, kind: KindId, remaining: u32) {
        if let Some(&i) = self.index.get(&kind) {
            self.piles[i].remaining = remaining;
        }
    }
}
