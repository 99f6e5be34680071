//! Supply setup rules.
//!
//! ## Base piles
//!
//! | Card     | 2p       | 3p | 4p |
//! |----------|----------|----|----|
//! | Copper   | 60 - 7N  |    |    |
//! | Silver   | 40       | 40 | 40 |
//! | Gold     | 30       | 30 | 30 |
//! | Estate   | 8        | 12 | 12 |
//! | Duchy    | 8        | 12 | 12 |
//! | Province | 8        | 12 | 12 |
//! | Curse    | 10       | 20 | 30 |
//!
//! ## Kingdom
//!
//! A fixed number of distinct action kinds, chosen uniformly without
//! replacement, 10 copies each.

use super::pile::Supply;
use crate::cards::{CardCatalog, KindId, COPPER, CURSE, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::SetupError;
use crate::core::rng::GameRng;

/// Copies of each kingdom kind.
pub const KINGDOM_PILE_SIZE: u32 = 10;

/// Coppers in the game before starting decks are dealt.
const COPPER_TOTAL: u32 = 60;

/// Coppers in each starting deck.
pub const STARTING_COPPERS: usize = 7;

/// Estates in each starting deck.
pub const STARTING_ESTATES: usize = 3;

/// Starting count of each basic pile for `player_count` players.
///
/// ```
/// use rust_dominion::supply::base_counts;
///
/// let counts = base_counts(2).unwrap();
/// assert_eq!(counts[0], ("Copper", 46));
/// assert_eq!(counts[6], ("Curse", 10));
/// assert!(base_counts(5).is_err());
/// ```
pub fn base_counts(player_count: usize) -> Result<[(&'static str, u32); 7], SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(SetupError::PlayerCount(player_count));
    }

    let n = player_count as u32;
    let victory = if n == 2 { 8 } else { 12 };
    let curses = 10 * (n - 1);

    Ok([
        (COPPER, COPPER_TOTAL - STARTING_COPPERS as u32 * n),
        (SILVER, 40),
        (GOLD, 30),
        (ESTATE, victory),
        (DUCHY, victory),
        (PROVINCE, victory),
        (CURSE, curses),
    ])
}

/// Pick `count` distinct action kinds at random.
///
/// Returned in catalog order so the supply layout is stable for a given
/// selection.
pub fn select_kingdom(
    catalog: &CardCatalog,
    count: usize,
    rng: &mut GameRng,
) -> Result<Vec<KindId>, SetupError> {
    let candidates: Vec<KindId> = catalog.kingdom_candidates().map(|k| k.id).collect();

    let mut picked = rng
        .sample_indices(candidates.len(), count)
        .ok_or(SetupError::NotEnoughKingdomCards {
            requested: count,
            available: candidates.len(),
        })?;
    picked.sort_unstable();

    Ok(picked.into_iter().map(|i| candidates[i]).collect())
}

/// Resolve a fixed kingdom given by name.
///
/// Any non-basic kind may be named (this is how Victory kingdom cards such as
/// Gardens enter a game); basics, unknown names, and repeats are rejected.
pub fn resolve_kingdom(catalog: &CardCatalog, names: &[String]) -> Result<Vec<KindId>, SetupError> {
    let mut kinds = Vec::with_capacity(names.len());

    for name in names {
        let kind = catalog
            .find(name)
            .ok_or_else(|| SetupError::UnknownCard(name.clone()))?;
        if CardCatalog::is_basic(&kind.name) {
            return Err(SetupError::NotKingdomCard(kind.name.clone()));
        }
        if kinds.contains(&kind.id) {
            return Err(SetupError::DuplicateKingdomCard(kind.name.clone()));
        }
        kinds.push(kind.id);
    }

    Ok(kinds)
}

impl Supply {
    /// Build the supply for a game: the seven basic piles for
    /// `player_count`, then one pile of `KINGDOM_PILE_SIZE` per kingdom kind.
    pub fn for_game(
        catalog: &CardCatalog,
        player_count: usize,
        kingdom: &[KindId],
    ) -> Result<Self, SetupError> {
        let mut supply = Supply::new();

        for (name, count) in base_counts(player_count)? {
            let kind = catalog.require(name)?;
            supply.add_pile(kind.id, name, count);
        }

        for &id in kingdom {
            let kind = catalog.kind(id);
            supply.add_pile(id, kind.name.clone(), KINGDOM_PILE_SIZE);
        }

        Ok(supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_counts_table() {
        let two = base_counts(2).unwrap();
        let three = base_counts(3).unwrap();
        let four = base_counts(4).unwrap();

        assert_eq!(two.map(|(_, c)| c), [46, 40, 30, 8, 8, 8, 10]);
        assert_eq!(three.map(|(_, c)| c), [39, 40, 30, 12, 12, 12, 20]);
        assert_eq!(four.map(|(_, c)| c), [32, 40, 30, 12, 12, 12, 30]);
    }

    #[test]
    fn test_base_counts_rejects_bad_player_counts() {
        for n in [0, 1, 5] {
            assert_eq!(base_counts(n).err(), Some(SetupError::PlayerCount(n)));
        }
    }

    #[test]
    fn test_select_kingdom_distinct_actions() {
        let catalog = CardCatalog::base_set();
        let mut rng = GameRng::new(11);

        let kingdom = select_kingdom(&catalog, 10, &mut rng).unwrap();

        assert_eq!(kingdom.len(), 10);
        let mut dedup = kingdom.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), 10);
        assert!(kingdom.iter().all(|&id| catalog.kind(id).is_action()));
    }

    #[test]
    fn test_select_whole_pool() {
        let catalog = CardCatalog::base_set();
        let mut rng = GameRng::new(11);

        let kingdom = select_kingdom(&catalog, 25, &mut rng).unwrap();
        let all: Vec<_> = catalog.kingdom_candidates().map(|k| k.id).collect();
        assert_eq!(kingdom, all);
    }

    #[test]
    fn test_select_too_many() {
        let catalog = CardCatalog::base_set();
        let mut rng = GameRng::new(11);

        assert_eq!(
            select_kingdom(&catalog, 26, &mut rng),
            Err(SetupError::NotEnoughKingdomCards {
                requested: 26,
                available: 25
            })
        );
    }

    #[test]
    fn test_resolve_kingdom() {
        let catalog = CardCatalog::base_set();
        fn names(v: &[&str]) -> Vec<String> {
            v.iter().map(|s| s.to_string()).collect()
        }

        let kinds = resolve_kingdom(&catalog, &names(&["Gardens", "Village"])).unwrap();
        assert_eq!(catalog.kind(kinds[0]).name, "Gardens");

        assert_eq!(
            resolve_kingdom(&catalog, &names(&["Nope"])),
            Err(SetupError::UnknownCard("Nope".to_string()))
        );
        assert_eq!(
            resolve_kingdom(&catalog, &names(&["Gold"])),
            Err(SetupError::NotKingdomCard("Gold".to_string()))
        );
        assert_eq!(
            resolve_kingdom(&catalog, &names(&["Smithy", "Smithy"])),
            Err(SetupError::DuplicateKingdomCard("Smithy".to_string()))
        );
    }

    #[test]
    fn test_supply_for_game() {
        let catalog = CardCatalog::base_set();
        let smithy = catalog.find("Smithy").unwrap().id;

        let supply = Supply::for_game(&catalog, 3, &[smithy]).unwrap();

        assert_eq!(supply.len(), 8);
        assert_eq!(supply.count_by_name("Copper"), Some(39));
        assert_eq!(supply.count_by_name("Province"), Some(12));
        assert_eq!(supply.count(smithy), Some(10));
        assert_eq!(supply.piles()[7].name, "Smithy");
    }

    #[test]
    fn test_supply_needs_basics() {
        let catalog = CardCatalog::new();
        assert_eq!(
            Supply::for_game(&catalog, 2, &[]),
            Err(SetupError::MissingBasicCard("Copper"))
        );
    }
}
