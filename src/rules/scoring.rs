//! Final scoring.
//!
//! A player's score is the signed sum of victory points over every owned
//! Victory or Curse instance, plus `floor(total / 10)` for each Gardens they
//! own. Scoring reads state only; it never mutates a player.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, GARDENS};
use crate::core::player::PlayerId;
use crate::core::state::PlayerState;

/// Owned cards per Gardens point.
pub const GARDENS_DIVISOR: usize = 10;

/// One player's final score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub name: String,
    pub points: i32,
    pub total_cards: usize,
    pub gardens: usize,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Two or more players share the top score.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or as part of a tie).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie(ps) => ps.contains(&player),
        }
    }

    /// Every player holding the top score.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        }
    }
}

/// Score one player.
#[must_use]
pub fn score_player(player: &PlayerState, catalog: &CardCatalog) -> PlayerScore {
    let total_cards = player.total_cards();
    let gardens_id = catalog.find(GARDENS).map(|k| k.id);

    let mut points = 0;
    let mut gardens = 0;
    for card in player.owned_cards() {
        let kind = catalog.kind(card.kind);
        if kind.category.is_scored() {
            points += kind.vp;
        }
        if Some(card.kind) == gardens_id {
            gardens += 1;
        }
    }
    points += (gardens * (total_cards / GARDENS_DIVISOR)) as i32;

    PlayerScore {
        player: player.id,
        name: player.name.clone(),
        points,
        total_cards,
        gardens,
    }
}

/// Decide the winner from final scores.
///
/// Returns `None` only for an empty slice.
#[must_use]
pub fn decide(scores: &[PlayerScore]) -> Option<GameResult> {
    let best = scores.iter().map(|s| s.points).max()?;
    let mut top: Vec<PlayerId> = scores
        .iter()
        .filter(|s| s.points == best)
        .map(|s| s.player)
        .collect();

    Some(if top.len() == 1 {
        GameResult::Winner(top.remove(0))
    } else {
        GameResult::Tie(top)
    })
}
