//! Game rules that sit above a single player: when the game ends and who won.

pub mod end;
pub mod scoring;

pub use end::{check_end, EndReason, EMPTY_PILES_TO_END};
pub use scoring::{decide, score_player, GameResult, PlayerScore, GARDENS_DIVISOR};
