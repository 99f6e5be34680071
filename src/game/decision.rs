//! The decision interface between the controller and whoever picks cards.
//!
//! The controller asks; the decision maker answers with a card name or
//! `Skip`. Answers are untrusted: a name that is unknown, unplayable or
//! unaffordable is reported as a failed play or buy and the question is
//! asked again.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::view::PlayerView;

/// Answer to a decision request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Play or buy the named card.
    Card(String),
    /// End the current phase.
    Skip,
}

impl Choice {
    /// Shorthand for `Choice::Card`.
    #[must_use]
    pub fn card(name: impl Into<String>) -> Self {
        Choice::Card(name.into())
    }
}

/// Source of player decisions.
///
/// One decision maker serves the whole table; `view.player` says who is
/// acting. Implementations may block (a console prompt) or answer
/// immediately (a script or bot).
pub trait DecisionMaker {
    /// Pick an action card to play, or skip the rest of the action phase.
    fn request_action_choice(&mut self, view: &PlayerView<'_>) -> Choice;

    /// Pick a card to buy, or skip the rest of the buy phase.
    fn request_buy_choice(&mut self, view: &PlayerView<'_>) -> Choice;
}

/// Replays fixed answers in order, then skips forever.
///
/// ```
/// use rust_dominion::game::{Choice, ScriptedDecisions};
///
/// let script = ScriptedDecisions::new()
///     .with_actions([Choice::card("Smithy")])
///     .with_buys([Choice::card("Silver"), Choice::Skip]);
/// assert_eq!(script.remaining(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    actions: VecDeque<Choice>,
    buys: VecDeque<Choice>,
}

impl ScriptedDecisions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for action requests.
    #[must_use]
    pub fn with_actions(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.actions.extend(choices);
        self
    }

    /// Queue answers for buy requests.
    #[must_use]
    pub fn with_buys(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.buys.extend(choices);
        self
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len() + self.buys.len()
    }
}

impl DecisionMaker for ScriptedDecisions {
    fn request_action_choice(&mut self, _view: &PlayerView<'_>) -> Choice {
        self.actions.pop_front().unwrap_or(Choice::Skip)
    }

    fn request_buy_choice(&mut self, _view: &PlayerView<'_>) -> Choice {
        self.buys.pop_front().unwrap_or(Choice::Skip)
    }
}
