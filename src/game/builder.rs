//! Game construction.
//!
//! `GameBuilder` turns a `GameConfig` into a `Game` ready for its first
//! turn. Setup order is fixed so a seed reproduces the whole game:
//!
//! 1. Validate the table (2-4 uniquely named players).
//! 2. Seed the RNG (`config.seed`, or a random seed that is recorded).
//! 3. Choose the kingdom: the fixed list if configured, else a random draw.
//! 4. Build the supply.
//! 5. Deal and shuffle each starting deck in seat order, then draw opening
//!    hands in seat order.

use im::Vector;

use super::controller::Game;
use super::event::GameEvent;
use super::phase::Phase;
use crate::cards::CardCatalog;
use crate::core::config::GameConfig;
use crate::core::entity::InstanceIds;
use crate::core::error::SetupError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::PlayerState;
use crate::supply::{resolve_kingdom, select_kingdom, Supply};

/// Builder for a `Game`.
///
/// ```
/// use rust_dominion::core::GameConfig;
/// use rust_dominion::game::{GameBuilder, Phase};
///
/// let game = GameBuilder::new(GameConfig::new(["Ann", "Bo"]).with_seed(7))
///     .build()
///     .unwrap();
///
/// assert_eq!(game.phase(), Phase::Action);
/// assert_eq!(game.supply().len(), 17);
/// assert_eq!(game.player_state(game.current_player()).hand().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    catalog: Option<CardCatalog>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            catalog: None,
        }
    }

    /// Use a custom catalog instead of the base set.
    ///
    /// The catalog must contain the seven basic cards.
    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<Game, SetupError> {
        let GameBuilder { config, catalog } = self;
        config.validate()?;

        let catalog = catalog.unwrap_or_else(CardCatalog::base_set);
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let kingdom = match &config.kingdom {
            Some(names) => resolve_kingdom(&catalog, names)?,
            None => select_kingdom(&catalog, config.kingdom_size, &mut rng)?,
        };
        let player_count = config.players.len();
        let supply = Supply::for_game(&catalog, player_count, &kingdom)?;

        let mut ids = InstanceIds::new();
        let mut players = PlayerMap::new(player_count, |id| {
            PlayerState::new(id, config.players[id.index()].clone())
        });
        for id in PlayerId::all(player_count) {
            players[id].initialize_deck(&catalog, &mut ids, &mut rng)?;
        }
        for id in PlayerId::all(player_count) {
            players[id].draw_hand(config.hand_size, &mut rng);
        }

        let started = GameEvent::GameStarted {
            seed: rng.seed(),
            players: config.players.clone(),
            kingdom: kingdom.iter().map(|&k| catalog.kind(k).name.clone()).collect(),
        };

        Ok(Game {
            catalog,
            players,
            supply,
            rng,
            ids,
            config,
            turn: 0,
            current: PlayerId::new(0),
            phase: Phase::Action,
            history: Vector::unit(started),
            summary: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardCategory, GARDENS};

    fn config() -> GameConfig {
        GameConfig::new(["Ann", "Bo", "Cy"]).with_seed(99)
    }

    #[test]
    fn test_build_deals_every_player() {
        let game = GameBuilder::new(config()).build().unwrap();

        for player in game.players() {
            assert_eq!(player.total_cards(), 10);
            assert_eq!(player.hand().len(), 5);
            assert_eq!(player.zones().deck().len(), 5);
        }
        assert_eq!(game.supply().count_by_name("Copper"), Some(39));
        assert_eq!(game.supply().len(), 17);
    }

    #[test]
    fn test_build_records_start_event() {
        let game = GameBuilder::new(config()).build().unwrap();

        match game.history().front() {
            Some(GameEvent::GameStarted { seed, players, kingdom }) => {
                assert_eq!(*seed, 99);
                assert_eq!(players.len(), 3);
                assert_eq!(kingdom.len(), 10);
            }
            other => panic!("unexpected first event {other:?}"),
        }
    }

    #[test]
    fn test_random_seed_is_recorded() {
        let game = GameBuilder::new(GameConfig::new(["Ann", "Bo"])).build().unwrap();

        let Some(GameEvent::GameStarted { seed, .. }) = game.history().front() else {
            panic!("missing start event");
        };
        assert_eq!(*seed, game.seed());
    }

    #[test]
    fn test_fixed_kingdom_with_gardens() {
        let config = config().with_kingdom([GARDENS, "Smithy"]);
        let game = GameBuilder::new(config).build().unwrap();

        assert_eq!(game.supply().len(), 9);
        assert_eq!(game.supply().count_by_name(GARDENS), Some(10));
    }

    #[test]
    fn test_setup_errors() {
        assert_eq!(
            GameBuilder::new(GameConfig::new(["Solo"])).build().err(),
            Some(SetupError::PlayerCount(1))
        );
        assert_eq!(
            GameBuilder::new(config().with_kingdom_size(30)).build().err(),
            Some(SetupError::NotEnoughKingdomCards {
                requested: 30,
                available: 25
            })
        );
        assert_eq!(
            GameBuilder::new(config().with_kingdom(["Moat", "Nope"])).build().err(),
            Some(SetupError::UnknownCard("Nope".to_string()))
        );
        assert_eq!(
            GameBuilder::new(config().with_turn_limit(0)).build().err(),
            Some(SetupError::ZeroTurnLimit)
        );
    }

    #[test]
    fn test_custom_catalog_needs_basics() {
        let catalog = CardCatalog::from_kinds([
            CardKind::new("Copper", CardCategory::Treasure, 0).with_coins(1),
            CardKind::new("Village", CardCategory::Action, 3).with_actions(2),
        ])
        .unwrap();

        let err = GameBuilder::new(config().with_kingdom(["Village"]))
            .catalog(catalog)
            .build()
            .err();
        assert_eq!(err, Some(SetupError::MissingBasicCard("Silver")));
    }
}
