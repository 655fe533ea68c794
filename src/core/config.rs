//! Match configuration.
//!
//! `RulesConfig` carries the board geometry, dealing sizes, and the named
//! rule-variant policies. One canonical ruleset is the default; the
//! variants exist so that a match never mixes conventions implicitly.
//!
//! ```
//! use chase_on::core::{LandingTieBreak, MovementConvention, RulesConfig};
//!
//! let rules = RulesConfig::default()
//!     .with_convention(MovementConvention::Converging)
//!     .with_landing_tie_break(LandingTieBreak::ActivePlayer);
//!
//! assert!(rules.validate().is_ok());
//! assert_eq!(rules.board_size, 14);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CatalogError;

/// Direction convention for positive movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementConvention {
    /// Both seats move clockwise on positive values and chase each other
    /// around the shared track.
    #[default]
    SameRotation,
    /// Seat 0 moves clockwise and seat 1 counter-clockwise, closing the
    /// gap from opposite ends. End-of-deck comparisons still measure
    /// clockwise from each seat.
    Converging,
}

/// Who wins when both seats land on the same position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingTieBreak {
    /// The larger absolute move wins; equal moves go to the active seat.
    #[default]
    LargerMove,
    /// The active seat always wins.
    ActivePlayer,
}

/// Evaluation order when both seats trip an instant win/lose trigger in
/// the same round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerOrder {
    /// The active seat's trigger decides the match.
    #[default]
    ActiveFirst,
    /// The choosing seat's trigger decides the match.
    PassiveFirst,
}

/// Errors raised while validating configuration before a match starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least 2 positions, got {0}")]
    BoardTooSmall(u8),
    #[error("home position {home} for {player} is outside 1..={board_size}")]
    HomeOutOfRange {
        player: PlayerId,
        home: u8,
        board_size: u8,
    },
    #[error("both seats share home position {0}")]
    SharedHome(u8),
    #[error("starting hand of {0} cards cannot form a proposal")]
    HandTooSmall(usize),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Rules for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of positions on the circular track (positions are `1..=board_size`).
    pub board_size: u8,

    /// Starting position of each seat.
    pub homes: [u8; 2],

    /// Cards dealt to each seat at match start.
    pub starting_hand: usize,

    /// Cards drawn by the proposer after each accepted proposal.
    pub replacement_draw: usize,

    /// Direction convention for positive movement.
    pub convention: MovementConvention,

    /// Policy for simultaneous landings.
    pub landing_tie_break: LandingTieBreak,

    /// Policy for simultaneous instant triggers.
    pub trigger_order: TriggerOrder,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: 14,
            homes: [1, 8],
            starting_hand: 4,
            replacement_draw: 2,
            convention: MovementConvention::SameRotation,
            landing_tie_break: LandingTieBreak::LargerMove,
            trigger_order: TriggerOrder::ActiveFirst,
        }
    }
}

impl RulesConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    /// Set both home positions.
    #[must_use]
    pub fn with_homes(mut self, homes: [u8; 2]) -> Self {
        self.homes = homes;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand = size;
        self
    }

    /// Set the direction convention.
    #[must_use]
    pub fn with_convention(mut self, convention: MovementConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Set the landing tie-break policy.
    #[must_use]
    pub fn with_landing_tie_break(mut self, policy: LandingTieBreak) -> Self {
        self.landing_tie_break = policy;
        self
    }

    /// Set the instant-trigger evaluation order.
    #[must_use]
    pub fn with_trigger_order(mut self, order: TriggerOrder) -> Self {
        self.trigger_order = order;
        self
    }

    /// Home position of a seat.
    #[must_use]
    pub fn home(&self, player: PlayerId) -> u8 {
        self.homes[player.index()]
    }

    /// Check geometry and dealing sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }

        for player in PlayerId::all() {
            let home = self.home(player);
            if home == 0 || home > self.board_size {
                return Err(ConfigError::HomeOutOfRange {
                    player,
                    home,
                    board_size: self.board_size,
                });
            }
        }

        if self.homes[0] == self.homes[1] {
            return Err(ConfigError::SharedHome(self.homes[0]));
        }

        if self.starting_hand < 2 {
            return Err(ConfigError::HandTooSmall(self.starting_hand));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RulesConfig::default();
        assert_eq!(rules.board_size, 14);
        assert_eq!(rules.homes, [1, 8]);
        assert_eq!(rules.starting_hand, 4);
        assert_eq!(rules.replacement_draw, 2);
        assert_eq!(rules.convention, MovementConvention::SameRotation);
        assert_eq!(rules.landing_tie_break, LandingTieBreak::LargerMove);
        assert_eq!(rules.trigger_order, TriggerOrder::ActiveFirst);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_validate_board_too_small() {
        let rules = RulesConfig::default().with_board_size(1).with_homes([1, 1]);
        assert_eq!(rules.validate(), Err(ConfigError::BoardTooSmall(1)));
    }

    #[test]
    fn test_validate_home_out_of_range() {
        let rules = RulesConfig::default().with_homes([1, 15]);
        assert_eq!(
            rules.validate(),
            Err(ConfigError::HomeOutOfRange {
                player: PlayerId::new(1),
                home: 15,
                board_size: 14,
            })
        );

        let rules = RulesConfig::default().with_homes([0, 8]);
        assert!(matches!(rules.validate(), Err(ConfigError::HomeOutOfRange { .. })));
    }

    #[test]
    fn test_validate_shared_home() {
        let rules = RulesConfig::default().with_homes([5, 5]);
        assert_eq!(rules.validate(), Err(ConfigError::SharedHome(5)));
    }

    #[test]
    fn test_validate_hand_too_small() {
        let rules = RulesConfig::default().with_starting_hand(1);
        assert_eq!(rules.validate(), Err(ConfigError::HandTooSmall(1)));
    }

    #[test]
    fn test_serialization() {
        let rules = RulesConfig::default().with_convention(MovementConvention::Converging);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
