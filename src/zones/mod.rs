//! Player zones.
//!
//! Each player has exactly three zones: deck (ordered, drawn from the top),
//! hand, and discard pile. `PlayerZones` owns all three and performs every
//! move between them, including the lazy reshuffle of discard into deck.

pub mod piles;

pub use piles::{DrawReport, PlayerZones};
