//! Player state: zones plus per-turn resources.
//!
//! ## Turn resources
//!
//! `actions`, `buys` and `coins` reset to (1, 1, 0) at the end of every turn.
//!
//! ## Atomicity
//!
//! `play_action` and `buy` check every precondition before touching
//! anything. A rejected call returns an error and leaves the player (and the
//! supply) exactly as it was.

use serde::{Deserialize, Serialize};

use super::entity::InstanceIds;
use super::error::{BuyError, PlayError, SetupError};
use super::player::PlayerId;
use super::rng::GameRng;
use crate::cards::{CardCatalog, CardCategory, CardInstance, CardKind, KindId, Zone, COPPER, ESTATE};
use crate::supply::{Supply, STARTING_COPPERS, STARTING_ESTATES};
use crate::zones::{DrawReport, PlayerZones};

/// Resources at the start of a turn.
pub const STARTING_ACTIONS: u32 = 1;
pub const STARTING_BUYS: u32 = 1;

/// What a successful action play did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The instance that was played (now on the discard pile).
    pub card: CardInstance,
    /// Bonus cards drawn.
    pub draw: DrawReport,
}

/// One player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Seat in turn order.
    pub id: PlayerId,

    /// Display name, unique within a game.
    pub name: String,

    /// Deck, hand and discard pile.
    zones: PlayerZones,

    /// Actions left this turn.
    pub actions: u32,

    /// Buys left this turn.
    pub buys: u32,

    /// Coins available this turn.
    pub coins: u32,

    /// Instances this player has acquired, starting deck included.
    acquired: usize,
}

impl PlayerState {
    /// Create a player with empty zones and fresh turn resources.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            zones: PlayerZones::new(id),
            actions: STARTING_ACTIONS,
            buys: STARTING_BUYS,
            coins: 0,
            acquired: 0,
        }
    }

    /// Read access to the zones.
    #[must_use]
    pub fn zones(&self) -> &PlayerZones {
        &self.zones
    }

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        self.zones.hand()
    }

    /// Every owned instance (deck, hand, discard).
    pub fn owned_cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.zones.owned()
    }

    /// Number of owned instances.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.total()
    }

    /// Number of instances this player has ever acquired.
    ///
    /// Always equal to `total_cards()`: nothing in the game trashes cards.
    #[must_use]
    pub fn acquired(&self) -> usize {
        self.acquired
    }

    /// Owned copies of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: KindId) -> usize {
        self.zones.count_of(kind)
    }

    /// Deal the starting deck: 7 Copper and 3 Estate, shuffled.
    ///
    /// Replaces the deck; hand, discard and turn resources are untouched.
    pub fn initialize_deck(
        &mut self,
        catalog: &CardCatalog,
        ids: &mut InstanceIds,
        rng: &mut GameRng,
    ) -> Result<(), SetupError> {
        let copper = catalog.require(COPPER)?.id;
        let estate = catalog.require(ESTATE)?.id;

        let mut deck: Vec<CardInstance> = std::iter::repeat(copper)
            .take(STARTING_COPPERS)
            .chain(std::iter::repeat(estate).take(STARTING_ESTATES))
            .map(|kind| CardInstance::new(ids.alloc(), kind, self.id, Zone::Deck))
            .collect();
        rng.shuffle(&mut deck);

        let replaced = self.zones.set_deck(deck);
        self.acquired = self.acquired + STARTING_COPPERS + STARTING_ESTATES - replaced.len();
        Ok(())
    }

    /// Draw until the hand holds `n` cards, or both deck and discard run out.
    pub fn draw_hand(&mut self, n: usize, rng: &mut GameRng) -> DrawReport {
        let missing = n.saturating_sub(self.zones.len(Zone::Hand));
        self.zones.draw(missing, rng)
    }

    /// Draw `k` more cards, with the same reshuffle rule as `draw_hand`.
    pub fn draw_cards(&mut self, k: usize, rng: &mut GameRng) -> DrawReport {
        self.zones.draw(k, rng)
    }

    /// Play an action card from hand.
    ///
    /// Spends one action, applies the card's magnitudes, draws its bonus
    /// cards, then discards it. The card is held aside while drawing so a
    /// reshuffle cannot pick it up.
    pub fn play_action(&mut self, kind: &CardKind, rng: &mut GameRng) -> Result<PlayOutcome, PlayError> {
        if self.actions == 0 {
            return Err(PlayError::NoActions);
        }
        if !kind.is_action() {
            return Err(PlayError::NotAnAction {
                card: kind.name.clone(),
            });
        }
        let card = self
            .zones
            .take_from_hand(kind.id)
            .ok_or_else(|| PlayError::NotInHand {
                card: kind.name.clone(),
            })?;

        self.actions -= 1;
        self.actions += kind.effects.actions;
        self.buys += kind.effects.buys;
        self.coins += kind.effects.coins;
        let draw = self.zones.draw(kind.effects.cards as usize, rng);

        let card = self.zones.put_in_discard(card);

        Ok(PlayOutcome { card, draw })
    }

    /// Play every treasure in hand: add its coins and discard it.
    ///
    /// Returns the coins added.
    pub fn play_treasures(&mut self, catalog: &CardCatalog) -> u32 {
        let played = self
            .zones
            .discard_from_hand_where(|c| catalog.kind(c.kind).category == CardCategory::Treasure);

        let added: u32 = played
            .iter()
            .map(|c| catalog.kind(c.kind).effects.coins)
            .sum();
        self.coins += added;
        added
    }

    /// Buy a card: pay its cost, spend a buy, take it from the supply, and
    /// put a new instance on the discard pile.
    pub fn buy(
        &mut self,
        kind: &CardKind,
        supply: &mut Supply,
        ids: &mut InstanceIds,
    ) -> Result<CardInstance, BuyError> {
        if self.buys == 0 {
            return Err(BuyError::NoBuys);
        }
        if self.coins < kind.cost {
            return Err(BuyError::InsufficientCoins {
                card: kind.name.clone(),
                cost: kind.cost,
                coins: self.coins,
            });
        }
        match supply.count(kind.id) {
            None => {
                return Err(BuyError::NotInSupply {
                    card: kind.name.clone(),
                })
            }
            Some(0) => {
                return Err(BuyError::PileEmpty {
                    card: kind.name.clone(),
                })
            }
            Some(_) => {}
        }

        let taken = supply.take(kind.id);
        debug_assert!(taken, "pile was checked non-empty");
        self.coins -= kind.cost;
        self.buys -= 1;

        let card = CardInstance::new(ids.alloc(), kind.id, self.id, Zone::Discard);
        self.zones.gain(card);
        self.acquired += 1;
        Ok(card)
    }

    /// Discard the hand and reset turn resources. Does not draw.
    pub fn end_turn(&mut self) {
        self.zones.discard_hand();
        self.actions = STARTING_ACTIONS;
        self.buys = STARTING_BUYS;
        self.coins = 0;
    }
}
