//! Game events: the engine's log.
//!
//! Every event is recorded in the game's history (a persistent
//! `im::Vector`, cheap to clone and snapshot) and forwarded to the driver's
//! `EventSink`. Events are plain serde data; a driver can print them, write
//! them as JSON lines, or ignore them.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::rules::{EndReason, GameResult, PlayerScore};

/// Something that happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    GameStarted {
        seed: u64,
        players: Vec<String>,
        kingdom: Vec<String>,
    },
    TurnStarted {
        turn: u32,
        player: PlayerId,
        hand: Vec<String>,
    },
    CardPlayed {
        player: PlayerId,
        card: String,
        /// Counters after the play.
        actions: u32,
        buys: u32,
        coins: u32,
        drawn: usize,
    },
    CardPlayFailed {
        player: PlayerId,
        card: String,
        reason: String,
    },
    TreasuresPlayed {
        player: PlayerId,
        count: usize,
        coins: u32,
    },
    CardBought {
        player: PlayerId,
        card: String,
        /// Copies left in the pile.
        remaining: u32,
    },
    BuyFailed {
        player: PlayerId,
        card: String,
        reason: String,
    },
    /// A player's discard pile was shuffled into a new deck.
    Reshuffled { player: PlayerId },
    TurnEnded { turn: u32, player: PlayerId },
    GameOver {
        reason: EndReason,
        scores: Vec<PlayerScore>,
        result: GameResult,
    },
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::CardPlayFailed { player, .. }
            | GameEvent::TreasuresPlayed { player, .. }
            | GameEvent::CardBought { player, .. }
            | GameEvent::BuyFailed { player, .. }
            | GameEvent::Reshuffled { player }
            | GameEvent::TurnEnded { player, .. } => Some(*player),
            GameEvent::GameStarted { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Receiver for events as they happen.
///
/// Closures taking `&GameEvent` are sinks:
///
/// ```
/// use rust_dominion::game::{EventSink, GameEvent};
/// use rust_dominion::core::PlayerId;
///
/// let mut seen = 0;
/// let mut sink = |_: &GameEvent| seen += 1;
/// sink.notify(&GameEvent::Reshuffled { player: PlayerId::new(0) });
/// assert_eq!(seen, 1);
/// ```
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Sink that keeps every event.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events concerning one player.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.player() == Some(player))
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_collects() {
        let mut log = EventLog::new();
        log.notify(&GameEvent::Reshuffled { player: PlayerId::new(1) });
        log.notify(&GameEvent::TurnEnded {
            turn: 1,
            player: PlayerId::new(0),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.for_player(PlayerId::new(1)).count(), 1);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = GameEvent::CardBought {
            player: PlayerId::new(0),
            card: "Silver".to_string(),
            remaining: 39,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "CardBought");
        assert_eq!(json["card"], "Silver");

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_game_over_serializes_scores() {
        let event = GameEvent::GameOver {
            reason: EndReason::ProvincesExhausted,
            scores: vec![PlayerScore {
                player: PlayerId::new(0),
                name: "Ann".to_string(),
                points: 12,
                total_cards: 30,
                gardens: 0,
            }],
            result: GameResult::Winner(PlayerId::new(0)),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"points\":12"));
        assert!(json.contains("ProvincesExhausted"));
    }
}
