//! Card catalog: the eight agent types and their movement tables.
//!
//! Each type has three movement entries, indexed by copy number: the 1st
//! copy a player recruits uses entry 0, the 2nd entry 1, and the 3rd and
//! every later copy entry 2. An entry is either a signed step count or
//! one of the instant sentinels `Win` / `Lose`.
//!
//! | Type         | 1st | 2nd | 3rd+ | Copies |
//! |--------------|-----|-----|------|--------|
//! | Double Agent | -1  |  6  |  -1  | 6 |
//! | Enforcer     |  1  |  2  |   3  | 6 |
//! | Codebreaker  |  0  |  0  | WIN  | 6 |
//! | Saboteur     | -1  | -1  |  -2  | 6 |
//! | Daredevil    |  2  |  3  | LOSE | 6 |
//! | Sentinel     |  0  |  2  |   6  | 6 |
//! | Sidekick     |  4  |  4  |   4  | 1 |
//! | Mole         | -3  | -3  |  -3  | 1 |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Total number of cards in a standard deck.
pub const DECK_SIZE: usize = 38;

/// One entry of a movement table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// Signed number of steps along the owner's heading.
    Steps(i32),
    /// Recruiting this copy wins the match immediately.
    Win,
    /// Recruiting this copy loses the match immediately.
    Lose,
}

impl Movement {
    /// Step count, with the instant sentinels contributing no movement.
    #[must_use]
    pub const fn steps(self) -> i32 {
        match self {
            Movement::Steps(n) => n,
            Movement::Win | Movement::Lose => 0,
        }
    }

    /// Whether this entry ends the match on acquisition.
    #[must_use]
    pub const fn is_instant(self) -> bool {
        matches!(self, Movement::Win | Movement::Lose)
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Movement::Steps(n) if *n > 0 => write!(f, "+{}", n),
            Movement::Steps(n) => write!(f, "{}", n),
            Movement::Win => f.write_str("WIN"),
            Movement::Lose => f.write_str("LOSE"),
        }
    }
}

/// The eight agent types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardType {
    DoubleAgent,
    Enforcer,
    Codebreaker,
    Saboteur,
    Daredevil,
    Sentinel,
    Sidekick,
    Mole,
}

use Movement::{Lose, Steps, Win};

impl CardType {
    /// All types in catalog order.
    pub const ALL: [CardType; 8] = [
        CardType::DoubleAgent,
        CardType::Enforcer,
        CardType::Codebreaker,
        CardType::Saboteur,
        CardType::Daredevil,
        CardType::Sentinel,
        CardType::Sidekick,
        CardType::Mole,
    ];

    /// Movement table indexed by copy number minus one (clamped to 2).
    #[must_use]
    pub const fn movement_table(self) -> [Movement; 3] {
        match self {
            CardType::DoubleAgent => [Steps(-1), Steps(6), Steps(-1)],
            CardType::Enforcer => [Steps(1), Steps(2), Steps(3)],
            CardType::Codebreaker => [Steps(0), Steps(0), Win],
            CardType::Saboteur => [Steps(-1), Steps(-1), Steps(-2)],
            CardType::Daredevil => [Steps(2), Steps(3), Lose],
            CardType::Sentinel => [Steps(0), Steps(2), Steps(6)],
            CardType::Sidekick => [Steps(4), Steps(4), Steps(4)],
            CardType::Mole => [Steps(-3), Steps(-3), Steps(-3)],
        }
    }

    /// Number of copies in the deck.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            CardType::Sidekick | CardType::Mole => 1,
            _ => 6,
        }
    }

    /// Movement entry for the `copy_number`-th copy (1-based).
    ///
    /// Copy numbers of 0 are treated as 1; copies beyond the 3rd reuse
    /// the 3rd entry.
    #[must_use]
    pub fn movement_for_copy(self, copy_number: u32) -> Movement {
        let index = copy_number.saturating_sub(1).min(2) as usize;
        self.movement_table()[index]
    }

    /// Step count for the `copy_number`-th copy, sentinels counting as 0.
    #[must_use]
    pub fn steps_for_copy(self, copy_number: u32) -> i32 {
        self.movement_for_copy(copy_number).steps()
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::DoubleAgent => "Double Agent",
            CardType::Enforcer => "Enforcer",
            CardType::Codebreaker => "Codebreaker",
            CardType::Saboteur => "Saboteur",
            CardType::Daredevil => "Daredevil",
            CardType::Sentinel => "Sentinel",
            CardType::Sidekick => "Sidekick",
            CardType::Mole => "Mole",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog misconfiguration. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog builds {actual} cards, expected {expected}")]
    DeckSize { expected: usize, actual: usize },
    #[error("{0} has no copies in the deck")]
    NoCopies(CardType),
    #[error("{0} carries a WIN/LOSE entry outside its 3rd-copy slot or on the wrong type")]
    StraySentinel(CardType),
}

/// Check the catalog's internal consistency.
///
/// Instant outcomes are keyed to Codebreaker (WIN) and Daredevil (LOSE) on
/// the 3rd copy; any other placement of a sentinel is a catalog bug.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let mut total = 0;

    for card_type in CardType::ALL {
        if card_type.copies() == 0 {
            return Err(CatalogError::NoCopies(card_type));
        }
        total += card_type.copies();

        let table = card_type.movement_table();
        let expected_third = match card_type {
            CardType::Codebreaker => Some(Win),
            CardType::Daredevil => Some(Lose),
            _ => None,
        };

        let stray_early = table[..2].iter().any(|m| m.is_instant());
        let third_matches = match expected_third {
            Some(sentinel) => table[2] == sentinel,
            None => !table[2].is_instant(),
        };

        if stray_early || !third_matches {
            return Err(CatalogError::StraySentinel(card_type));
        }
    }

    if total != DECK_SIZE {
        return Err(CatalogError::DeckSize {
            expected: DECK_SIZE,
            actual: total,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn test_copy_counts() {
        let total: usize = CardType::ALL.iter().map(|t| t.copies()).sum();
        assert_eq!(total, DECK_SIZE);
        assert_eq!(CardType::Sidekick.copies(), 1);
        assert_eq!(CardType::Mole.copies(), 1);
        assert_eq!(CardType::Enforcer.copies(), 6);
    }

    #[test]
    fn test_movement_for_copy_clamps() {
        let t = CardType::Enforcer;
        assert_eq!(t.movement_for_copy(0), Steps(1));
        assert_eq!(t.movement_for_copy(1), Steps(1));
        assert_eq!(t.movement_for_copy(2), Steps(2));
        assert_eq!(t.movement_for_copy(3), Steps(3));
        assert_eq!(t.movement_for_copy(4), Steps(3));
        assert_eq!(t.movement_for_copy(100), Steps(3));
    }

    #[test]
    fn test_sentinels_contribute_no_steps() {
        assert_eq!(CardType::Codebreaker.movement_for_copy(3), Win);
        assert_eq!(CardType::Codebreaker.steps_for_copy(3), 0);
        assert_eq!(CardType::Daredevil.movement_for_copy(5), Lose);
        assert_eq!(CardType::Daredevil.steps_for_copy(5), 0);
        assert_eq!(CardType::Daredevil.steps_for_copy(2), 3);
    }

    #[test]
    fn test_double_agent_second_copy() {
        assert_eq!(CardType::DoubleAgent.steps_for_copy(1), -1);
        assert_eq!(CardType::DoubleAgent.steps_for_copy(2), 6);
        assert_eq!(CardType::DoubleAgent.steps_for_copy(3), -1);
    }

    #[test]
    fn test_movement_display() {
        assert_eq!(Steps(3).to_string(), "+3");
        assert_eq!(Steps(0).to_string(), "0");
        assert_eq!(Steps(-2).to_string(), "-2");
        assert_eq!(Win.to_string(), "WIN");
        assert_eq!(Lose.to_string(), "LOSE");
    }

    #[test]
    fn test_names() {
        assert_eq!(CardType::DoubleAgent.to_string(), "Double Agent");
        assert_eq!(CardType::Mole.name(), "Mole");
    }
}
