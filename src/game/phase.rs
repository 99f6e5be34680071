//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the game is within the current turn.
///
/// `Action -> Buy -> Cleanup -> (next player's) Action`, until the end check
/// after a cleanup moves the game to `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Action,
    Buy,
    Cleanup,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Action => "Action",
            Phase::Buy => "Buy",
            Phase::Cleanup => "Cleanup",
            Phase::GameOver => "Game over",
        };
        f.write_str(label)
    }
}
