//! Catch detection after both seats have moved.
//!
//! Two ways to catch the other spy:
//!
//! 1. **Collision**: both land on the same position. The larger absolute
//!    move wins (or the active seat, depending on `LandingTieBreak`).
//! 2. **Overtake**: the seat that moved strictly more spaces has any
//!    position of the other seat's path this round (its old position,
//!    its new position, or anything in between) on its own path.
//!
//! Equal-magnitude moves to different positions never catch.

use serde::{Deserialize, Serialize};

use super::track::{Move, Track};
use crate::core::{LandingTieBreak, PlayerId, PlayerMap};

/// A catch that ends the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pursuit {
    /// Both seats ended on the same position.
    Collision {
        winner: PlayerId,
        /// Resolved by the tie-break rather than by move size.
        tie: bool,
    },
    /// The longer mover passed through the other seat's path.
    Overtake { winner: PlayerId },
}

impl Pursuit {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            Pursuit::Collision { winner, .. } | Pursuit::Overtake { winner } => *winner,
        }
    }
}

/// Check the moves of one round for a catch.
#[must_use]
pub fn detect_pursuit(
    track: &Track,
    moves: &PlayerMap<Move>,
    active: PlayerId,
    tie_break: LandingTieBreak,
) -> Option<Pursuit> {
    let passive = active.opponent();
    let a = &moves[active];
    let p = &moves[passive];

    if a.to == p.to {
        let (winner, tie) = match tie_break {
            LandingTieBreak::ActivePlayer => (active, true),
            LandingTieBreak::LargerMove => match a.magnitude().cmp(&p.magnitude()) {
                std::cmp::Ordering::Greater => (active, false),
                std::cmp::Ordering::Less => (passive, false),
                std::cmp::Ordering::Equal => (active, true),
            },
        };
        return Some(Pursuit::Collision { winner, tie });
    }

    let (longer, shorter) = match a.magnitude().cmp(&p.magnitude()) {
        std::cmp::Ordering::Greater => (active, passive),
        std::cmp::Ordering::Less => (passive, active),
        std::cmp::Ordering::Equal => return None,
    };

    let long_path = track.path(&moves[longer]);
    let short_path = track.path(&moves[shorter]);

    if short_path.iter().any(|pos| long_path.contains(pos)) {
        log::debug!("{} overtook {}", longer, shorter);
        return Some(Pursuit::Overtake { winner: longer });
    }

    None
}
