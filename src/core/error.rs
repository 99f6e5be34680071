//! Error types.
//!
//! All failures during play are local and recoverable: a rejected play or buy
//! leaves every piece of state untouched and the controller simply asks
//! again. Only setup can fail fatally.

use thiserror::Error;

/// An action card could not be played (`InvalidPlay`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no actions left")]
    NoActions,
    #[error("{card} is not an action card")]
    NotAnAction { card: String },
    #[error("{card} is not in hand")]
    NotInHand { card: String },
    #[error("unknown card {name:?}")]
    UnknownCard { name: String },
}

/// A card could not be bought (`InvalidBuy`).
///
/// The variants exist for diagnostics; callers treat all of them as one
/// failed buy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuyError {
    #[error("no buys left")]
    NoBuys,
    #[error("{card} costs {cost} but only {coins} coins available")]
    InsufficientCoins { card: String, cost: u32, coins: u32 },
    #[error("the {card} pile is empty")]
    PileEmpty { card: String },
    #[error("{card} is not in the supply")]
    NotInSupply { card: String },
    #[error("unknown card {name:?}")]
    UnknownCard { name: String },
}

/// Game construction failed. Raised before any turn begins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("invalid player count {0}: expected 2, 3 or 4")]
    PlayerCount(usize),
    #[error("duplicate player name {0:?}")]
    DuplicatePlayer(String),
    #[error("duplicate card name {0:?} in catalog")]
    DuplicateCard(String),
    #[error("catalog is missing basic card {0}")]
    MissingBasicCard(&'static str),
    #[error("requested {requested} kingdom cards but only {available} action kinds exist")]
    NotEnoughKingdomCards { requested: usize, available: usize },
    #[error("unknown kingdom card {0:?}")]
    UnknownCard(String),
    #[error("{0} cannot be used as a kingdom card")]
    NotKingdomCard(String),
    #[error("kingdom card {0} listed twice")]
    DuplicateKingdomCard(String),
    #[error("turn limit must be at least 1")]
    ZeroTurnLimit,
}

/// Umbrella error for controller operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid play: {0}")]
    InvalidPlay(#[from] PlayError),
    #[error("invalid buy: {0}")]
    InvalidBuy(#[from] BuyError),
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("the game is over")]
    GameOver,
}
