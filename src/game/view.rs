//! Read-only views handed to decision makers.
//!
//! A view borrows the game immutably, so nothing holding one can change
//! state. It carries exactly what a player at the table may see when asked
//! to choose: their own hand, their counters, and the supply.

use smallvec::SmallVec;

use super::phase::Phase;
use crate::cards::{CardCatalog, CardKind};
use crate::core::player::PlayerId;
use crate::supply::{Pile, Supply};

/// The supply as seen by players.
#[derive(Clone, Copy, Debug)]
pub struct SupplyView<'a> {
    supply: &'a Supply,
    catalog: &'a CardCatalog,
}

impl<'a> SupplyView<'a> {
    pub(crate) fn new(supply: &'a Supply, catalog: &'a CardCatalog) -> Self {
        Self { supply, catalog }
    }

    /// Piles in setup order.
    #[must_use]
    pub fn piles(&self) -> &'a [Pile] {
        self.supply.piles()
    }

    /// Remaining copies by name. `None` if the card is not in this game.
    #[must_use]
    pub fn count(&self, name: &str) -> Option<u32> {
        self.supply.count_by_name(name)
    }

    /// Every kind in the supply with its remaining count.
    pub fn kinds(&self) -> impl Iterator<Item = (&'a CardKind, u32)> + 'a {
        let catalog = self.catalog;
        self.supply
            .piles()
            .iter()
            .map(move |p| (catalog.kind(p.kind), p.remaining))
    }
}

/// What the acting player sees when asked for a decision.
#[derive(Clone, Debug)]
pub struct PlayerView<'a> {
    pub player: PlayerId,
    pub name: &'a str,
    /// 1-based number of the turn in progress.
    pub turn: u32,
    pub phase: Phase,
    /// Hand contents in draw order.
    pub hand: SmallVec<[&'a CardKind; 8]>,
    pub actions: u32,
    pub buys: u32,
    pub coins: u32,
    pub supply: SupplyView<'a>,
}

impl<'a> PlayerView<'a> {
    /// Action kinds in hand, one entry per distinct kind.
    #[must_use]
    pub fn playable_actions(&self) -> SmallVec<[&'a CardKind; 8]> {
        let mut out: SmallVec<[&'a CardKind; 8]> = SmallVec::new();
        for &kind in &self.hand {
            if kind.is_action() && !out.iter().any(|k| k.id == kind.id) {
                out.push(kind);
            }
        }
        out
    }

    /// Kinds with copies left that cost at most the current coins.
    pub fn affordable(&self) -> impl Iterator<Item = &'a CardKind> + 'a {
        let coins = self.coins;
        self.supply
            .kinds()
            .filter(move |&(kind, remaining)| remaining > 0 && kind.cost <= coins)
            .map(|(kind, _)| kind)
    }

    /// Copies of `name` in hand.
    #[must_use]
    pub fn in_hand(&self, name: &str) -> usize {
        self.hand.iter().filter(|k| k.name == name).count()
    }
}
