//! Console driver.
//!
//! ```text
//! dominion [--json] [--seed N] [--turn-limit N] [--config FILE] [NAME...]
//! ```
//!
//! Players take turns at one terminal. At each prompt type a card name, or
//! press enter to skip. Events go to stdout as text, or as JSON lines with
//! `--json`; prompts go to stderr.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rust_dominion::game::{Choice, DecisionMaker, EventSink, GameBuilder, GameEvent, PlayerView};
use rust_dominion::GameConfig;

/// Play a game of Dominion at the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// RNG seed; random when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// End the game after this many turns
    #[arg(long)]
    turn_limit: Option<u32>,

    /// JSON game configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Player names in turn order (override the config file)
    players: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<GameConfig, Box<dyn Error>> {
        let base = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Command-line values win over the loaded configuration.
    fn apply(self, mut config: GameConfig) -> GameConfig {
        if !self.players.is_empty() {
            config.players = self.players;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.turn_limit.is_some() {
            config.turn_limit = self.turn_limit;
        }
        config
    }
}

/// Reads choices from stdin.
struct StdinDecisions {
    closed: bool,
}

impl StdinDecisions {
    fn ask(&mut self, view: &PlayerView<'_>, prompt: &str, options: &[&str]) -> Choice {
        if self.closed {
            return Choice::Skip;
        }

        let hand: Vec<&str> = view.hand.iter().map(|k| k.name.as_str()).collect();
        eprintln!(
            "[{}] turn {} | actions {} buys {} coins {}",
            view.name, view.turn, view.actions, view.buys, view.coins
        );
        eprintln!("  hand: {}", hand.join(", "));
        eprintln!("  options: {}", options.join(", "));
        eprint!("{prompt} (enter to skip)> ");
        // An unflushed prompt still appears with the next write.
        io::stderr().flush().ok();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.closed = true;
                Choice::Skip
            }
            Ok(_) => match line.trim() {
                "" | "skip" => Choice::Skip,
                name => Choice::card(name),
            },
        }
    }
}

impl DecisionMaker for StdinDecisions {
    fn request_action_choice(&mut self, view: &PlayerView<'_>) -> Choice {
        let actions = view.playable_actions();
        let options: Vec<&str> = actions.iter().map(|k| k.name.as_str()).collect();
        self.ask(view, "play", &options)
    }

    fn request_buy_choice(&mut self, view: &PlayerView<'_>) -> Choice {
        let options: Vec<&str> = view.affordable().map(|k| k.name.as_str()).collect();
        self.ask(view, "buy", &options)
    }
}

/// Renders events to stdout.
struct Printer {
    json: bool,
    names: Vec<String>,
}

impl Printer {
    fn name(&self, player: rust_dominion::PlayerId) -> &str {
        self.names
            .get(player.index())
            .map_or("?", String::as_str)
    }

    fn text(&self, event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted { seed, players, kingdom } => format!(
                "New game (seed {seed}): {}\nKingdom: {}",
                players.join(", "),
                kingdom.join(", ")
            ),
            GameEvent::TurnStarted { turn, player, hand } => {
                format!("\n== Turn {turn}: {} ==\nHand: {}", self.name(*player), hand.join(", "))
            }
            GameEvent::CardPlayed { card, actions, buys, coins, drawn, .. } => format!(
                "Played {card} (drew {drawn}); actions {actions}, buys {buys}, coins {coins}"
            ),
            GameEvent::CardPlayFailed { card, reason, .. } => {
                format!("Cannot play {card}: {reason}")
            }
            GameEvent::TreasuresPlayed { count, coins, .. } => {
                format!("Played {count} treasures for {coins} coins")
            }
            GameEvent::CardBought { card, remaining, .. } => {
                format!("Bought {card} ({remaining} left)")
            }
            GameEvent::BuyFailed { card, reason, .. } => format!("Cannot buy {card}: {reason}"),
            GameEvent::Reshuffled { player } => format!("{} reshuffles", self.name(*player)),
            GameEvent::TurnEnded { player, .. } => format!("{} ends the turn", self.name(*player)),
            GameEvent::GameOver { reason, scores, .. } => {
                let mut out = format!("\nGame over: {reason}");
                for score in scores {
                    out.push_str(&format!(
                        "\n  {}: {} points ({} cards)",
                        score.name, score.points, score.total_cards
                    ));
                }
                out
            }
        }
    }
}

impl EventSink for Printer {
    fn notify(&mut self, event: &GameEvent) {
        if self.json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("cannot encode event: {err}"),
            }
        } else {
            println!("{}", self.text(event));
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = args.json;
    let config = args.into_config()?;

    let mut game = GameBuilder::new(config).build()?;
    let mut printer = Printer {
        json,
        names: game.players().map(|p| p.name.clone()).collect(),
    };
    for event in game.history() {
        printer.notify(event);
    }

    let mut decisions = StdinDecisions { closed: false };
    while !game.is_over() {
        game.play_turn(&mut decisions, &mut printer)?;
        if decisions.closed && !game.is_over() {
            eprintln!("input closed; stopping after turn {}", game.turn());
            break;
        }
    }

    if let Some(summary) = game.summary() {
        if !json {
            println!("Winner: {}", summary.winner_names().join(" and "));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dominion").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_map_to_config() {
        let config = parse(&["-s", "5", "--turn-limit", "40", "Ann", "Bo"]).apply(GameConfig::default());

        assert_eq!(config.players, vec!["Ann".to_string(), "Bo".to_string()]);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.turn_limit, Some(40));
    }

    #[test]
    fn test_long_seed_with_equals() {
        let args = parse(&["--seed=9", "--json", "Ann", "Bo", "Cy"]);

        assert!(args.json);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.players.len(), 3);
    }

    #[test]
    fn test_command_line_overrides_loaded_config() {
        let loaded = GameConfig::new(["X", "Y"]).with_seed(1).with_turn_limit(10);

        let config = parse(&["Ann", "Bo"]).apply(loaded.clone());
        assert_eq!(config.players, vec!["Ann".to_string(), "Bo".to_string()]);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.turn_limit, Some(10));

        assert_eq!(parse(&[]).apply(loaded.clone()), loaded);
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        let bad = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("dominion").chain(args.iter().copied())).is_err()
        };
        assert!(bad(&["--seed", "x"]));
        assert!(bad(&["--unknown"]));
    }
}
