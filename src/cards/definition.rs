//! Card kinds - static card data.
//!
//! A `CardKind` is one catalog entry: "Village", "Province", and so on.
//! Every physical copy in a game is a `CardInstance` pointing back at its kind
//! through a `KindId`.

use serde::{Deserialize, Serialize};

/// Dense identifier for a kind within one `CardCatalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KindId(pub u16);

impl KindId {
    /// Create a new kind ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for KindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Treasure,
    Victory,
    Action,
    #[serde(rename = "Action-Attack")]
    ActionAttack,
    #[serde(rename = "Action-Reaction")]
    ActionReaction,
    Curse,
}

impl CardCategory {
    /// Can a card of this category be played in the action phase?
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Self::Action | Self::ActionAttack | Self::ActionReaction)
    }

    /// Does this category count towards the final score?
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Victory | Self::Curse)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Treasure => "Treasure",
            Self::Victory => "Victory",
            Self::Action => "Action",
            Self::ActionAttack => "Action-Attack",
            Self::ActionReaction => "Action-Reaction",
            Self::Curse => "Curse",
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Effect magnitudes applied when a card is played.
///
/// All default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CardEffects {
    /// +Actions.
    pub actions: u32,
    /// +Buys.
    pub buys: u32,
    /// +Coins. For treasures, the coin value.
    pub coins: u32,
    /// +Cards drawn.
    pub cards: u32,
}

/// Static card definition.
///
/// The name uniquely determines every other field within one catalog.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardCategory, CardKind};
///
/// let market = CardKind::new("Market", CardCategory::Action, 5)
///     .with_cards(1)
///     .with_actions(1)
///     .with_buys(1)
///     .with_coins(1);
///
/// assert_eq!(market.effects.buys, 1);
/// assert_eq!(market.vp, 0);
/// assert!(market.is_action());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardKind {
    /// Assigned when the kind is registered in a catalog.
    #[serde(skip)]
    pub id: KindId,

    /// Unique card name.
    pub name: String,

    /// Card category.
    pub category: CardCategory,

    /// Cost in coins.
    pub cost: u32,

    /// On-play magnitudes.
    #[serde(default)]
    pub effects: CardEffects,

    /// Victory points. Signed: curses are negative.
    #[serde(default)]
    pub vp: i32,
}

impl Default for KindId {
    fn default() -> Self {
        Self(u16::MAX)
    }
}

impl CardKind {
    /// Create a kind with zero effects and zero victory points.
    #[must_use]
    pub fn new(name: impl Into<String>, category: CardCategory, cost: u32) -> Self {
        Self {
            id: KindId::default(),
            name: name.into(),
            category,
            cost,
            effects: CardEffects::default(),
            vp: 0,
        }
    }

    /// Set +Actions.
    #[must_use]
    pub fn with_actions(mut self, n: u32) -> Self {
        self.effects.actions = n;
        self
    }

    /// Set +Buys.
    #[must_use]
    pub fn with_buys(mut self, n: u32) -> Self {
        self.effects.buys = n;
        self
    }

    /// Set +Coins.
    #[must_use]
    pub fn with_coins(mut self, n: u32) -> Self {
        self.effects.coins = n;
        self
    }

    /// Set +Cards.
    #[must_use]
    pub fn with_cards(mut self, n: u32) -> Self {
        self.effects.cards = n;
        self
    }

    /// Set victory points.
    #[must_use]
    pub fn with_vp(mut self, vp: i32) -> Self {
        self.vp = vp;
        self
    }

    /// Shorthand for `category.is_action()`.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.category.is_action()
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Cost: {}, Actions: {}, Buys: {}, Coins: {}, Cards: {}, VP: {}",
            self.name,
            self.category,
            self.cost,
            self.effects.actions,
            self.effects.buys,
            self.effects.coins,
            self.effects.cards,
            self.vp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_categories() {
        assert!(CardCategory::Action.is_action());
        assert!(CardCategory::ActionAttack.is_action());
        assert!(CardCategory::ActionReaction.is_action());
        assert!(!CardCategory::Treasure.is_action());
        assert!(!CardCategory::Victory.is_action());
        assert!(!CardCategory::Curse.is_action());
    }

    #[test]
    fn test_scored_categories() {
        assert!(CardCategory::Victory.is_scored());
        assert!(CardCategory::Curse.is_scored());
        assert!(!CardCategory::Action.is_scored());
        assert!(!CardCategory::Treasure.is_scored());
    }

    #[test]
    fn test_defaults_are_zero() {
        let chapel = CardKind::new("Chapel", CardCategory::Action, 2);
        assert_eq!(chapel.effects, CardEffects::default());
        assert_eq!(chapel.vp, 0);
    }

    #[test]
    fn test_display() {
        let village = CardKind::new("Village", CardCategory::Action, 3)
            .with_cards(1)
            .with_actions(2);
        assert_eq!(
            village.to_string(),
            "Village (Action) - Cost: 3, Actions: 2, Buys: 0, Coins: 0, Cards: 1, VP: 0"
        );
    }

    #[test]
    fn test_category_serde_labels() {
        let json = serde_json::to_string(&CardCategory::ActionAttack).unwrap();
        assert_eq!(json, "\"Action-Attack\"");

        let kind: CardKind = serde_json::from_str(
            r#"{"name": "Moat", "category": "Action-Reaction", "cost": 2, "effects": {"cards": 2}}"#,
        )
        .unwrap();
        assert_eq!(kind.category, CardCategory::ActionReaction);
        assert_eq!(kind.effects.cards, 2);
        assert_eq!(kind.effects.coins, 0);
    }
}
