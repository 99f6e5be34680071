//! # rust-dominion
//!
//! A deterministic engine for a Dominion-style deck-building card game.
//!
//! ## Design Principles
//!
//! 1. **Kinds vs. instances**: A `CardKind` is catalog data shared by every
//!    copy; a `CardInstance` is one physical card that sits in exactly one
//!    zone at a time.
//!
//! 2. **Atomic operations**: Playing and buying check every precondition
//!    first. A rejected call is an error value and changes nothing.
//!
//! 3. **Explicit randomness**: All shuffles and the kingdom draw use one
//!    seedable `GameRng`. Same seed and same decisions, same game.
//!
//! 4. **Read-only views**: Decision makers see a `PlayerView` that borrows
//!    the game immutably; only the controller mutates state.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, RNG, configuration, errors, player state
//! - `cards`: Card kinds, instances, and the catalog
//! - `zones`: Deck, hand and discard pile of one player
//! - `supply`: Supply piles and setup rules
//! - `rules`: End-of-game detection and scoring
//! - `game`: Builder, turn state machine, decisions, views, events
//!
//! ## Example
//!
//! ```
//! use rust_dominion::{Choice, EventLog, GameBuilder, GameConfig, ScriptedDecisions};
//!
//! let config = GameConfig::new(["Ann", "Bo"]).with_seed(1).with_turn_limit(6);
//! let mut game = GameBuilder::new(config).build().unwrap();
//!
//! let mut decisions = ScriptedDecisions::new().with_buys([Choice::card("Silver")]);
//! let mut log = EventLog::new();
//! let summary = game.run(&mut decisions, &mut log).unwrap();
//!
//! assert_eq!(summary.scores.len(), 2);
//! assert!(game.is_over());
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod supply;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    BuyError, GameConfig, GameError, GameRng, InstanceId, InstanceIds, PlayError, PlayerId,
    PlayerMap, PlayerState, SetupError,
};

pub use crate::cards::{CardCatalog, CardCategory, CardEffects, CardInstance, CardKind, KindId, Zone};

pub use crate::zones::{DrawReport, PlayerZones};

pub use crate::supply::{Pile, Supply};

pub use crate::rules::{EndReason, GameResult, PlayerScore};

pub use crate::game::{
    Choice, DecisionMaker, EventLog, EventSink, Game, GameBuilder, GameEvent, GameSummary, Phase,
    PlayerView, ScriptedDecisions, SupplyView,
};
