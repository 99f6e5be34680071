//! End-of-game detection.
//!
//! Checked once per completed turn, after cleanup. The Province pile is
//! checked before the empty-pile count, so a turn that empties Provinces and
//! two other piles reports `ProvincesExhausted`.

use serde::{Deserialize, Serialize};

use crate::cards::PROVINCE;
use crate::supply::Supply;

/// Empty piles needed to end the game.
pub const EMPTY_PILES_TO_END: usize = 3;

/// Why the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The Province pile reached zero.
    ProvincesExhausted,
    /// Three or more piles reached zero. Holds their names, in setup order.
    PilesExhausted { piles: Vec<String> },
    /// The configured turn limit was reached.
    TurnLimit(u32),
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::ProvincesExhausted => write!(f, "the Province pile is empty"),
            EndReason::PilesExhausted { piles } => {
                write!(f, "{} piles are empty ({})", piles.len(), piles.join(", "))
            }
            EndReason::TurnLimit(turns) => write!(f, "turn limit of {turns} reached"),
        }
    }
}

/// Check the supply for an end condition.
///
/// ```
/// use rust_dominion::cards::KindId;
/// use rust_dominion::rules::{check_end, EndReason};
/// use rust_dominion::supply::Supply;
///
/// let mut supply = Supply::new();
/// supply.add_pile(KindId::new(5), "Province", 1);
/// assert_eq!(check_end(&supply), None);
///
/// supply.take(KindId::new(5));
/// assert_eq!(check_end(&supply), Some(EndReason::ProvincesExhausted));
/// ```
#[must_use]
pub fn check_end(supply: &Supply) -> Option<EndReason> {
    if supply.count_by_name(PROVINCE) == Some(0) {
        return Some(EndReason::ProvincesExhausted);
    }

    let empty: Vec<String> = supply.empty_piles().map(|p| p.name.clone()).collect();
    if empty.len() >= EMPTY_PILES_TO_END {
        return Some(EndReason::PilesExhausted { piles: empty });
    }

    None
}
