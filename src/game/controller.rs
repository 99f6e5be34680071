//! The game controller: turn order, phases, end detection, scoring.
//!
//! ## Turn flow
//!
//! `play_turn` runs one full turn for the current player:
//!
//! - **Action**: ask for an action card until the player skips or runs out
//!   of actions. A failed play is logged and the question is asked again.
//! - **Buy**: play treasures (when `auto_play_treasures` is set), then ask
//!   for a purchase until the player skips or runs out of buys.
//! - **Cleanup**: discard hand and reset counters, draw the next hand, pass
//!   to the next seat, then check whether the game has ended.
//!
//! Decision makers only ever see a `PlayerView`; every mutation goes through
//! `PlayerState` and `Supply` here.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::decision::{Choice, DecisionMaker};
use super::event::{EventSink, GameEvent};
use super::phase::Phase;
use super::view::{PlayerView, SupplyView};
use crate::cards::{CardCatalog, CardInstance};
use crate::core::config::GameConfig;
use crate::core::entity::InstanceIds;
use crate::core::error::{BuyError, GameError, PlayError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::{PlayOutcome, PlayerState};
use crate::rules::{check_end, decide, score_player, EndReason, GameResult, PlayerScore};
use crate::supply::Supply;

/// Final outcome of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub reason: EndReason,
    /// One entry per player, in seat order.
    pub scores: Vec<PlayerScore>,
    pub result: GameResult,
    /// Completed turns, across all players.
    pub turns: u32,
}

impl GameSummary {
    /// Names of every player holding the top score.
    #[must_use]
    pub fn winner_names(&self) -> Vec<&str> {
        self.scores
            .iter()
            .filter(|s| self.result.is_winner(s.player))
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// A game in progress (or finished).
///
/// Built by `GameBuilder`. Once the game is over it is read-only: every
/// mutating call returns `GameError::GameOver`.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) catalog: CardCatalog,
    pub(super) players: PlayerMap<PlayerState>,
    pub(super) supply: Supply,
    pub(super) rng: GameRng,
    pub(super) ids: InstanceIds,
    pub(super) config: GameConfig,
    /// Completed turns.
    pub(super) turn: u32,
    pub(super) current: PlayerId,
    pub(super) phase: Phase,
    pub(super) history: Vector<GameEvent>,
    pub(super) summary: Option<GameSummary>,
}

impl Game {
    // === Read access ===

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the game's RNG (the configured one, or the one chosen).
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.values()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player_state(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// The player whose turn it is (or would be, once the game is over).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every event so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Final outcome, once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// What the current player sees.
    #[must_use]
    pub fn view(&self) -> PlayerView<'_> {
        let player = &self.players[self.current];
        PlayerView {
            player: self.current,
            name: &player.name,
            turn: self.turn + 1,
            phase: self.phase,
            hand: player
                .hand()
                .iter()
                .map(|c| self.catalog.kind(c.kind))
                .collect(),
            actions: player.actions,
            buys: player.buys,
            coins: player.coins,
            supply: SupplyView::new(&self.supply, &self.catalog),
        }
    }

    // === Play ===

    /// Play until the game ends.
    pub fn run<D, S>(&mut self, decider: &mut D, sink: &mut S) -> Result<GameSummary, GameError>
    where
        D: DecisionMaker + ?Sized,
        S: EventSink + ?Sized,
    {
        loop {
            if let Some(summary) = self.play_turn(decider, sink)? {
                return Ok(summary);
            }
        }
    }

    /// Play one full turn for the current player.
    ///
    /// Returns the summary if this turn ended the game.
    pub fn play_turn<D, S>(
        &mut self,
        decider: &mut D,
        sink: &mut S,
    ) -> Result<Option<GameSummary>, GameError>
    where
        D: DecisionMaker + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.current;
        let turn = self.turn + 1;
        let hand = self.hand_names(player);
        self.emit(sink, GameEvent::TurnStarted { turn, player, hand });

        self.phase = Phase::Action;
        self.action_phase(decider, sink);

        self.phase = Phase::Buy;
        self.buy_phase(decider, sink);

        self.phase = Phase::Cleanup;
        self.cleanup(sink);
        self.emit(sink, GameEvent::TurnEnded { turn, player });

        self.turn = turn;
        self.current = player.next(self.player_count());

        match self.end_reason() {
            Some(reason) => Ok(Some(self.finish(reason, sink))),
            None => {
                self.phase = Phase::Action;
                Ok(None)
            }
        }
    }

    fn action_phase<D, S>(&mut self, decider: &mut D, sink: &mut S)
    where
        D: DecisionMaker + ?Sized,
        S: EventSink + ?Sized,
    {
        let player = self.current;

        while self.players[player].actions > 0 {
            let Choice::Card(name) = decider.request_action_choice(&self.view()) else {
                break;
            };

            match self.play_action(&name) {
                Ok(outcome) => {
                    let state = &self.players[player];
                    let event = GameEvent::CardPlayed {
                        player,
                        card: name,
                        actions: state.actions,
                        buys: state.buys,
                        coins: state.coins,
                        drawn: outcome.draw.drawn,
                    };
                    self.emit(sink, event);
                    if outcome.draw.reshuffled {
                        self.emit(sink, GameEvent::Reshuffled { player });
                    }
                }
                Err(err) => {
                    let reason = err.to_string();
                    self.emit(sink, GameEvent::CardPlayFailed { player, card: name, reason });
                }
            }
        }
    }

    fn buy_phase<D, S>(&mut self, decider: &mut D, sink: &mut S)
    where
        D: DecisionMaker + ?Sized,
        S: EventSink + ?Sized,
    {
        let player = self.current;

        if self.config.auto_play_treasures {
            let state = &mut self.players[player];
            let before = state.hand().len();
            let coins = state.play_treasures(&self.catalog);
            let count = before - state.hand().len();
            if count > 0 {
                self.emit(sink, GameEvent::TreasuresPlayed { player, count, coins });
            }
        }

        while self.players[player].buys > 0 {
            let Choice::Card(name) = decider.request_buy_choice(&self.view()) else {
                break;
            };

            match self.buy(&name) {
                Ok(card) => {
                    let remaining = self.supply.count(card.kind).unwrap_or(0);
                    self.emit(sink, GameEvent::CardBought { player, card: name, remaining });
                }
                Err(err) => {
                    let reason = err.to_string();
                    self.emit(sink, GameEvent::BuyFailed { player, card: name, reason });
                }
            }
        }
    }

    fn cleanup<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        let player = self.current;
        let state = &mut self.players[player];
        state.end_turn();
        let report = state.draw_hand(self.config.hand_size, &mut self.rng);
        if report.reshuffled {
            self.emit(sink, GameEvent::Reshuffled { player });
        }
    }

    fn play_action(&mut self, name: &str) -> Result<PlayOutcome, PlayError> {
        let kind = self.catalog.find(name).ok_or_else(|| PlayError::UnknownCard {
            name: name.to_string(),
        })?;
        self.players[self.current].play_action(kind, &mut self.rng)
    }

    fn buy(&mut self, name: &str) -> Result<CardInstance, BuyError> {
        let kind = self.catalog.find(name).ok_or_else(|| BuyError::UnknownCard {
            name: name.to_string(),
        })?;
        self.players[self.current].buy(kind, &mut self.supply, &mut self.ids)
    }

    fn end_reason(&self) -> Option<EndReason> {
        check_end(&self.supply).or_else(|| match self.config.turn_limit {
            Some(limit) if self.turn >= limit => Some(EndReason::TurnLimit(limit)),
            _ => None,
        })
    }

    fn finish<S: EventSink + ?Sized>(&mut self, reason: EndReason, sink: &mut S) -> GameSummary {
        let scores: Vec<PlayerScore> = self
            .players
            .values()
            .map(|p| score_player(p, &self.catalog))
            .collect();
        let result = decide(&scores).unwrap_or(GameResult::Tie(Vec::new()));

        let summary = GameSummary {
            reason,
            scores,
            result,
            turns: self.turn,
        };
        self.phase = Phase::GameOver;
        self.summary = Some(summary.clone());
        self.emit(
            sink,
            GameEvent::GameOver {
                reason: summary.reason.clone(),
                scores: summary.scores.clone(),
                result: summary.result.clone(),
            },
        );
        summary
    }

    fn hand_names(&self, player: PlayerId) -> Vec<String> {
        self.players[player]
            .hand()
            .iter()
            .map(|c| self.catalog.kind(c.kind).name.clone())
            .collect()
    }

    fn emit<S: EventSink + ?Sized>(&mut self, sink: &mut S, event: GameEvent) {
        sink.notify(&event);
        self.history.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PROVINCE;
    use crate::game::{EventLog, GameBuilder, ScriptedDecisions};

    fn game() -> Game {
        let config = GameConfig::new(["Ann", "Bo"])
            .with_seed(5)
            .with_kingdom(["Village", "Smithy", "Market", "Festival", "Moat"]);
        GameBuilder::new(config).build().unwrap()
    }

    fn skip_turn(game: &mut Game) -> Option<GameSummary> {
        game.play_turn(&mut ScriptedDecisions::new(), &mut EventLog::new())
            .unwrap()
    }

    fn kind_id(game: &Game, name: &str) -> crate::cards::KindId {
        game.catalog().find(name).unwrap().id
    }

    #[test]
    fn test_turn_rotates_and_redraws() {
        let mut game = game();

        assert_eq!(skip_turn(&mut game), None);

        assert_eq!(game.turn(), 1);
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.phase(), Phase::Action);
        let ann = game.player_state(PlayerId::new(0));
        assert_eq!(ann.hand().len(), 5);
        assert_eq!(ann.total_cards(), 10);
        assert_eq!((ann.actions, ann.buys, ann.coins), (1, 1, 0));

        skip_turn(&mut game);
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_failed_plays_are_reoffered() {
        let mut game = game();
        let mut script = ScriptedDecisions::new()
            .with_actions([Choice::card("Nope"), Choice::card("Village"), Choice::Skip]);
        let mut log = EventLog::new();

        game.play_turn(&mut script, &mut log).unwrap();

        let failures: Vec<_> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                GameEvent::CardPlayFailed { card, reason, .. } => Some((card.clone(), reason.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            failures,
            vec![
                ("Nope".to_string(), "unknown card \"Nope\"".to_string()),
                ("Village".to_string(), "Village is not in hand".to_string()),
            ]
        );
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_buy_phase_spends_buys() {
        let mut game = game();
        let mut script = ScriptedDecisions::new().with_buys([
            Choice::card(PROVINCE),
            Choice::card("Copper"),
            Choice::card("Copper"),
        ]);
        let mut log = EventLog::new();

        game.play_turn(&mut script, &mut log).unwrap();

        let bought = log
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::CardBought { .. }))
            .count();
        let failed = log
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::BuyFailed { .. }))
            .count();
        assert_eq!((bought, failed), (1, 1));
        // The second Copper is never asked for: buys ran out.
        assert_eq!(script.remaining(), 1);
        assert_eq!(game.supply().count_by_name("Copper"), Some(45));
        assert_eq!(game.player_state(PlayerId::new(0)).total_cards(), 11);
    }

    #[test]
    fn test_two_empty_piles_continue_three_end() {
        let mut game = game();
        game.supply.set_remaining(kind_id(&game, "Village"), 0);
        game.supply.set_remaining(kind_id(&game, "Smithy"), 0);

        assert_eq!(skip_turn(&mut game), None);
        assert!(!game.is_over());

        game.supply.set_remaining(kind_id(&game, "Moat"), 0);
        let summary = skip_turn(&mut game).unwrap();

        assert_eq!(
            summary.reason,
            EndReason::PilesExhausted {
                piles: vec!["Village".into(), "Smithy".into(), "Moat".into()]
            }
        );
        assert_eq!(summary.turns, 2);
        assert!(game.is_over());
    }

    #[test]
    fn test_empty_province_pile_ends_game() {
        let mut game = game();
        game.supply.set_remaining(kind_id(&game, PROVINCE), 0);

        let summary = skip_turn(&mut game).unwrap();

        assert_eq!(summary.reason, EndReason::ProvincesExhausted);
        assert_eq!(game.phase(), Phase::GameOver);
        // Identical starting decks: everyone has 3 points.
        assert_eq!(summary.result, GameResult::Tie(vec![PlayerId::new(0), PlayerId::new(1)]));
        assert_eq!(summary.winner_names(), vec!["Ann", "Bo"]);
    }

    #[test]
    fn test_game_over_rejects_further_play() {
        let mut game = game();
        game.supply.set_remaining(kind_id(&game, PROVINCE), 0);
        skip_turn(&mut game);
        let history = game.history().len();

        let mut script = ScriptedDecisions::new();
        let mut log = EventLog::new();
        assert_eq!(game.play_turn(&mut script, &mut log), Err(GameError::GameOver));
        assert_eq!(game.run(&mut script, &mut log), Err(GameError::GameOver));
        assert_eq!(game.history().len(), history);
        assert!(log.is_empty());
    }

    #[test]
    fn test_turn_limit() {
        let config = GameConfig::new(["Ann", "Bo", "Cy"]).with_seed(1).with_turn_limit(4);
        let mut game = GameBuilder::new(config).build().unwrap();

        let summary = game
            .run(&mut ScriptedDecisions::new(), &mut EventLog::new())
            .unwrap();

        assert_eq!(summary.reason, EndReason::TurnLimit(4));
        assert_eq!(summary.turns, 4);
        assert_eq!(game.summary(), Some(&summary));
    }

    #[test]
    fn test_history_mirrors_sink() {
        let mut game = game();
        let mut log = EventLog::new();

        game.play_turn(&mut ScriptedDecisions::new(), &mut log).unwrap();

        // History also holds GameStarted, recorded at build time.
        assert_eq!(game.history().len(), log.len() + 1);
        assert!(matches!(log.events().front(), Some(GameEvent::TurnStarted { turn: 1, .. })));
        assert!(matches!(log.events().back(), Some(GameEvent::TurnEnded { turn: 1, .. })));
    }

    #[test]
    fn test_view_shows_current_player() {
        let game = game();
        let view = game.view();

        assert_eq!(view.player, PlayerId::new(0));
        assert_eq!(view.name, "Ann");
        assert_eq!(view.turn, 1);
        assert_eq!(view.hand.len(), 5);
        assert_eq!(view.supply.count("Smithy"), Some(10));
        assert!(view.playable_actions().is_empty());
    }
}
