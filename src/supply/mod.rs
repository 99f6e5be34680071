//! The shared supply: what can be bought and how many copies remain.
//!
//! `pile` holds the runtime structure; `setup` holds the starting-count table
//! and kingdom selection.

pub mod pile;
pub mod setup;

pub use pile::{Pile, Supply};
pub use setup::{
    base_counts, resolve_kingdom, select_kingdom, KINGDOM_PILE_SIZE, STARTING_COPPERS,
    STARTING_ESTATES,
};
