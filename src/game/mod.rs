//! Game orchestration: building a game and running its turns.
//!
//! ## Key Types
//!
//! - `GameBuilder`: Config to ready-to-play `Game`
//! - `Game`: Turn state machine; owns players, supply and RNG
//! - `DecisionMaker`: Where choices come from
//! - `PlayerView`: Read-only snapshot handed to decision makers
//! - `GameEvent` / `EventSink`: The event log

pub mod builder;
pub mod controller;
pub mod decision;
pub mod event;
pub mod phase;
pub mod view;

pub use builder::GameBuilder;
pub use controller::{Game, GameSummary};
pub use decision::{Choice, DecisionMaker, ScriptedDecisions};
pub use event::{EventLog, EventSink, GameEvent};
pub use phase::Phase;
pub use view::{PlayerView, SupplyView};
