//! Game configuration.
//!
//! `GameConfig` is everything a driver decides before the first turn. It is a
//! plain serde struct so drivers can load it from JSON; missing fields take
//! their defaults.
//!
//! ```
//! use rust_dominion::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{"players": ["Alice", "Bob"]}"#).unwrap();
//! assert_eq!(config.kingdom_size, 10);
//! assert_eq!(config.hand_size, 5);
//! assert!(config.auto_play_treasures);
//! ```

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names in turn order. Must be unique.
    pub players: Vec<String>,

    /// Number of Action kinds drawn at random for the kingdom.
    pub kingdom_size: usize,

    /// Fixed kingdom (card names). Overrides random selection when set.
    pub kingdom: Option<Vec<String>>,

    /// Cards drawn at the end of each turn.
    pub hand_size: usize,

    /// RNG seed. A random seed is chosen when absent.
    pub seed: Option<u64>,

    /// Play every treasure in hand on entering the buy phase.
    pub auto_play_treasures: bool,

    /// End the game after this many completed turns. Zero is rejected.
    pub turn_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            kingdom_size: 10,
            kingdom: None,
            hand_size: 5,
            seed: None,
            auto_play_treasures: true,
            turn_limit: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given players with default rules.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the random kingdom size.
    #[must_use]
    pub fn with_kingdom_size(mut self, size: usize) -> Self {
        self.kingdom_size = size;
        self
    }

    /// Use a fixed kingdom instead of a random one.
    #[must_use]
    pub fn with_kingdom<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kingdom = Some(cards.into_iter().map(Into::into).collect());
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Check the table itself (player count, unique names) and the turn
    /// limit, which must allow at least one turn.
    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }

        for (i, name) in self.players.iter().enumerate() {
            if self.players[..i].contains(name) {
                return Err(SetupError::DuplicatePlayer(name.clone()));
            }
        }

        if self.turn_limit == Some(0) {
            return Err(SetupError::ZeroTurnLimit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(["A", "B"]);

        assert_eq!(config.players, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(config.kingdom_size, 10);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.kingdom, None);
        assert_eq!(config.turn_limit, None);
    }

    #[test]
    fn test_player_count_bounds() {
        for n in [0, 1, 5, 6] {
            let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
            assert_eq!(
                GameConfig::new(names).validate(),
                Err(SetupError::PlayerCount(n))
            );
        }
        for n in 2..=4 {
            let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
            assert_eq!(GameConfig::new(names).validate(), Ok(()));
        }
    }

    #[test]
    fn test_duplicate_names() {
        let config = GameConfig::new(["Ann", "Bo", "Ann"]);
        assert_eq!(
            config.validate(),
            Err(SetupError::DuplicatePlayer("Ann".to_string()))
        );
    }

    #[test]
    fn test_zero_turn_limit_rejected() {
        let config = GameConfig::new(["Ann", "Bo"]).with_turn_limit(0);
        assert_eq!(config.validate(), Err(SetupError::ZeroTurnLimit));

        let config = GameConfig::new(["Ann", "Bo"]).with_turn_limit(1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_json_round_trip_with_overrides() {
        let json = r#"{
            "players": ["A", "B", "C"],
            "kingdom": ["Village", "Smithy"],
            "seed": 7,
            "auto_play_treasures": false,
            "turn_limit": 40
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.players.len(), 3);
        assert_eq!(config.kingdom.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(config.seed, Some(7));
        assert!(!config.auto_play_treasures);
        assert_eq!(config.turn_limit, Some(40));
        assert_eq!(config.hand_size, 5);
    }
}
