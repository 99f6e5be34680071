//! Core engine types: instance ids, players, RNG, configuration, errors, and
//! per-player state.
//!
//! Everything here is independent of turn sequencing; the `game` module
//! composes these pieces into a running game.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use entity::{InstanceId, InstanceIds};
pub use error::{BuyError, GameError, PlayError, SetupError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{PlayOutcome, PlayerState, STARTING_ACTIONS, STARTING_BUYS};
