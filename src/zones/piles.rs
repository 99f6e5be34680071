//! A player's deck, hand, and discard pile.
//!
//! `PlayerZones` is the only code that moves instances between zones, and
//! every move goes through a method here that keeps `CardInstance::zone` in
//! sync. No method creates or destroys a card except `gain` (a new instance
//! arriving from the supply) and `set_deck` (the starting deal).
//!
//! ## Draw order
//!
//! The top of the deck is the end of the vector, as with a physical pile
//! turned face-down.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, KindId, Zone};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Result of a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// Cards actually moved to hand.
    pub drawn: usize,
    /// The discard pile was shuffled into a new deck during this draw.
    pub reshuffled: bool,
}

/// One player's zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    owner: PlayerId,
    deck: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    discard: Vec<CardInstance>,
}

impl PlayerZones {
    /// Create empty zones for `owner`.
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// The deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    /// The hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[CardInstance] {
        &self.discard
    }

    /// Number of cards in one zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        match zone {
            Zone::Deck => self.deck.len(),
            Zone::Hand => self.hand.len(),
            Zone::Discard => self.discard.len(),
        }
    }

    /// Cards across all three zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Every owned instance: deck, then hand, then discard.
    pub fn owned(&self) -> impl Iterator<Item = &CardInstance> {
        self.deck.iter().chain(&self.hand).chain(&self.discard)
    }

    /// Owned copies of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: KindId) -> usize {
        self.owned().filter(|c| c.is(kind)).count()
    }

    /// Does the hand hold a copy of `kind`?
    #[must_use]
    pub fn hand_contains(&self, kind: KindId) -> bool {
        self.hand.iter().any(|c| c.is(kind))
    }

    /// Replace the deck. Used for the starting deal only; the old deck is
    /// returned so no card silently disappears.
    pub fn set_deck(&mut self, cards: Vec<CardInstance>) -> Vec<CardInstance> {
        let cards = cards.into_iter().map(|c| self.claim(c, Zone::Deck)).collect();
        std::mem::replace(&mut self.deck, cards)
    }

    /// Place a newly acquired instance on the discard pile.
    pub fn gain(&mut self, card: CardInstance) {
        let card = self.claim(card, Zone::Discard);
        self.discard.push(card);
    }

    /// Draw up to `n` cards.
    ///
    /// An empty deck is refilled from the shuffled discard pile at most once
    /// per call, and only when a draw would otherwise fail. With both piles
    /// empty the draw stops short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..n {
            if self.deck.is_empty() {
                if report.reshuffled || self.discard.is_empty() {
                    break;
                }
                self.reshuffle(rng);
                report.reshuffled = true;
            }

            let Some(card) = self.deck.pop() else {
                break;
            };
            let card = self.claim(card, Zone::Hand);
            self.hand.push(card);
            report.drawn += 1;
        }

        report
    }

    /// Remove the first copy of `kind` from hand.
    ///
    /// The caller owns the returned instance and must put it back with
    /// `put_in_discard`.
    pub fn take_from_hand(&mut self, kind: KindId) -> Option<CardInstance> {
        let pos = self.hand.iter().position(|c| c.is(kind))?;
        Some(self.hand.remove(pos))
    }

    /// Move every hand card matching `predicate` to the discard pile.
    ///
    /// Returns the moved instances, in hand order.
    pub fn discard_from_hand_where(
        &mut self,
        mut predicate: impl FnMut(&CardInstance) -> bool,
    ) -> Vec<CardInstance> {
        let (moved, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.hand).into_iter().partition(|c| predicate(c));
        self.hand = kept;

        for &card in &moved {
            self.put_in_discard(card);
        }
        moved
    }

    /// Put an instance this player holds onto the discard pile.
    ///
    /// Returns the instance as it now sits in the pile.
    pub fn put_in_discard(&mut self, card: CardInstance) -> CardInstance {
        let card = self.claim(card, Zone::Discard);
        self.discard.push(card);
        card
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        let hand = std::mem::take(&mut self.hand);
        for card in hand {
            self.put_in_discard(card);
        }
        count
    }

    /// Shuffle the discard pile; it becomes the deck.
    fn reshuffle(&mut self, rng: &mut GameRng) {
        debug_assert!(self.deck.is_empty(), "reshuffle onto a non-empty deck");

        let mut cards = std::mem::take(&mut self.discard);
        rng.shuffle(&mut cards);
        for card in cards {
            let card = self.claim(card, Zone::Deck);
            self.deck.push(card);
        }
    }

    fn claim(&self, mut card: CardInstance, zone: Zone) -> CardInstance {
        card.owner = self.owner;
        card.zone = zone;
        card
    }
}
